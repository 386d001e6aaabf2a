use super::*;

fn dist(id: &str, name: &str, tier: Tier, region: Region, location: &str) -> Distributor {
    Distributor {
        id: id.to_owned(),
        name: name.to_owned(),
        tier,
        region,
        location: location.to_owned(),
        website: format!("https://{id}.example"),
        logo: None,
        phone: None,
        email: None,
        specialties: Vec::new(),
    }
}

fn directory() -> Vec<Distributor> {
    vec![
        dist("zot", "Zot Supply", Tier::Gold, Region::Usa, "National"),
        dist("stromquist", "Stromquist & Company", Tier::Associate, Region::Usa, "Georgia, Florida"),
        dist("kele", "Kele", Tier::Platinum, Region::Usa, "National"),
        dist("sontay", "Sontay", Tier::Gold, Region::Europe, "United Kingdom"),
        dist("aircon", "Aircon Controls", Tier::Associate, Region::International, "Dubai, UAE"),
    ]
}

fn ids(found: &[&Distributor]) -> Vec<String> {
    found.iter().map(|d| d.id.clone()).collect()
}

#[test]
fn empty_query_returns_everything_by_tier_then_name() {
    let all = directory();
    let found = search(&all, &DistributorQuery::default());
    assert_eq!(ids(&found), vec!["kele", "sontay", "zot", "aircon", "stromquist"]);
}

#[test]
fn region_filter() {
    let all = directory();
    let q = DistributorQuery { region: Some(Region::Usa), search: String::new() };
    assert_eq!(ids(&search(&all, &q)), vec!["kele", "zot", "stromquist"]);
}

#[test]
fn search_matches_name_or_location_case_insensitively() {
    let all = directory();
    let q = DistributorQuery { region: None, search: "  FLORIDA ".into() };
    assert_eq!(ids(&search(&all, &q)), vec!["stromquist"]);
    let q = DistributorQuery { region: None, search: "son".into() };
    assert_eq!(ids(&search(&all, &q)), vec!["sontay"]);
}

#[test]
fn search_and_region_combine() {
    let all = directory();
    let q = DistributorQuery { region: Some(Region::Europe), search: "national".into() };
    assert!(search(&all, &q).is_empty());
}

#[test]
fn region_counts_cover_whole_directory() {
    let counts = region_counts(&directory());
    assert_eq!(counts, RegionCounts { all: 5, usa: 3, europe: 1, international: 1 });
    assert_eq!(counts.get(None), 5);
    assert_eq!(counts.get(Some(Region::Europe)), 1);
}

#[test]
fn region_parse() {
    assert_eq!(Region::parse("usa"), Some(Region::Usa));
    assert_eq!(Region::parse("Europe"), Some(Region::Europe));
    assert_eq!(Region::parse("all"), None);
    assert_eq!(Region::parse(""), None);
}

#[test]
fn result_label_pluralizes() {
    assert_eq!(result_label(1), "1 authorized distributor");
    assert_eq!(result_label(0), "0 authorized distributors");
}

#[test]
fn distributor_decodes_lowercase_enums() {
    let d: Distributor = serde_json::from_str(
        r#"{"id":"kele","name":"Kele","tier":"platinum","region":"usa","location":"National","website":"https://www.kele.com"}"#,
    )
    .unwrap();
    assert_eq!(d.tier, Tier::Platinum);
    assert!(d.specialties.is_empty());
}
