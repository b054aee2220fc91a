use super::*;

#[test]
fn couple_forces_two_and_hides_count() {
    for current in [None, Some(1), Some(2), Some(9)] {
        let layout = layout_for(Some(TravelerType::Couple), current);
        assert_eq!(
            layout,
            CountLayout {
                count_visible: false,
                count: 2
            }
        );
    }
}

#[test]
fn solo_and_unknown_types_force_one() {
    for kind in [Some(TravelerType::Solo), None] {
        let layout = layout_for(kind, Some(6));
        assert!(!layout.count_visible);
        assert_eq!(layout.count, 1);
    }
}

#[test]
fn groups_show_count_and_reset_small_values_to_four() {
    for kind in [TravelerType::Family, TravelerType::Friends] {
        assert_eq!(layout_for(Some(kind), Some(1)).count, 4);
        assert_eq!(layout_for(Some(kind), Some(-3)).count, 4);
        assert_eq!(layout_for(Some(kind), None).count, 4);
        assert_eq!(layout_for(Some(kind), Some(2)).count, 2);
        assert_eq!(layout_for(Some(kind), Some(7)).count, 7);
        assert!(layout_for(Some(kind), Some(7)).count_visible);
    }
}

#[test]
fn adjusted_count_never_drops_below_one() {
    let mut count = Some(3);
    for delta in [-1, -1, -1, -1, 5, -100, 2, -1] {
        let next = adjusted_count(count, delta);
        assert!(next >= MIN_TRAVELERS);
        count = Some(i64::from(next));
    }
    assert_eq!(count, Some(2));
}

#[test]
fn adjusted_count_has_no_upper_bound() {
    assert_eq!(adjusted_count(Some(40), 1), 41);
    assert_eq!(adjusted_count(Some(i64::from(u32::MAX)), 1), u32::MAX);
}

#[test]
fn adjusted_count_treats_missing_number_as_one() {
    assert_eq!(adjusted_count(None, 1), 2);
    assert_eq!(adjusted_count(None, -1), 1);
}

#[test]
fn parse_count_reads_leading_digits() {
    assert_eq!(parse_count("4"), Some(4));
    assert_eq!(parse_count(" 12 "), Some(12));
    assert_eq!(parse_count("3 people"), Some(3));
    assert_eq!(parse_count("-2"), Some(-2));
    assert_eq!(parse_count(""), None);
    assert_eq!(parse_count("abc"), None);
}

#[test]
fn selector_values_map_to_types() {
    assert_eq!(
        TravelerType::from_selector_value("Friends"),
        Some(TravelerType::Friends)
    );
    assert_eq!(TravelerType::from_selector_value("Business"), None);
}

#[test]
fn selection_descriptions_match_planner_prompt_wording() {
    let solo = TravelerSelection {
        kind: TravelerType::Solo,
        count: 1,
    };
    let family = TravelerSelection {
        kind: TravelerType::Family,
        count: 5,
    };
    assert_eq!(solo.describe(), "Solo Traveler");
    assert_eq!(family.describe(), "Family group of 5");
}

#[test]
fn place_details_read_data_attributes() {
    let details = PlaceDetails::from_attributes(|name| match name {
        "data-name" => Some("Eiffel Tower".to_string()),
        "data-desc" => Some("Iconic tower".to_string()),
        "data-address" => Some("Paris".to_string()),
        "data-map" => Some("https://maps.example/x".to_string()),
        _ => None,
    });
    assert_eq!(details.name, "Eiffel Tower");
    assert_eq!(details.description, "Iconic tower");
    assert_eq!(details.address_line(), "Address: Paris");
    assert_eq!(details.map_link, "https://maps.example/x");
}

#[test]
fn missing_place_attributes_read_empty() {
    let details = PlaceDetails::from_attributes(|_| None);
    assert_eq!(details, PlaceDetails::default());
    assert_eq!(details.address_line(), "Address: ");
}
