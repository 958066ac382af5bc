use comparable_version::VersionKey;

fn main() {

    let mut versions : Vec<_> = std::env::args().skip(1).map(|s| VersionKey::parse(&s)).collect();

    versions.sort();
    versions.dedup();

    for v in versions {
        println!("{}", v.as_str());
    }
}
