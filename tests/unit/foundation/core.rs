use super::*;

#[test]
fn reported_page_is_twice_the_spread() {
    assert_eq!(SpreadIndex(0).reported_page(), PageIndex(0));
    assert_eq!(SpreadIndex(3).reported_page(), PageIndex(6));
}

#[test]
fn direction_follows_index_order() {
    assert_eq!(SpreadIndex(2).direction_to(SpreadIndex(3)), Direction::Forward);
    assert_eq!(SpreadIndex(2).direction_to(SpreadIndex(0)), Direction::Back);
    assert_eq!(SpreadIndex(2).direction_to(SpreadIndex(2)), Direction::None);
}

#[test]
fn direction_serializes_snake_case() {
    let s = serde_json::to_string(&Direction::Forward).unwrap();
    assert_eq!(s, "\"forward\"");
    let d: Direction = serde_json::from_str("\"back\"").unwrap();
    assert_eq!(d, Direction::Back);
}

#[test]
fn page_distance_is_symmetric() {
    assert_eq!(page_distance(PageIndex(2), PageIndex(9)), 7);
    assert_eq!(page_distance(PageIndex(9), PageIndex(2)), 7);
}
