use chrono::{TimeZone, Utc};
use sptcli::management::PlaylistOrder;
use sptcli::types::{ArtistRef, Playlist, PlaylistOwner, Track};
use sptcli::utils::*;
use std::collections::BTreeSet;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, duration: u64, artist_name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        duration,
        album: None,
        artists: vec![ArtistRef {
            id: format!("{}_artist_id", id),
            name: artist_name.to_string(),
        }],
        is_local: false,
        is_playable: true,
        added_at: String::new(),
    }
}

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        owner: PlaylistOwner {
            id: "owner_id".to_string(),
            display_name: "Owner".to_string(),
        },
        public: None,
        collaborative: false,
        snapshot_id: String::new(),
        tracks: None,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(999), "0:00");
    assert_eq!(format_duration(1000), "0:01");
    assert_eq!(format_duration(59_000), "0:59");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(61_500), "1:01");
    assert_eq!(format_duration(200_040), "3:20");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_combine_artist_names() {
    let artists = vec![
        ArtistRef {
            id: "a1".to_string(),
            name: "Artist A".to_string(),
        },
        ArtistRef {
            id: "a2".to_string(),
            name: "Artist B".to_string(),
        },
    ];

    assert_eq!(combine_artist_names(&artists, ", "), "Artist A, Artist B");
    assert_eq!(combine_artist_names(&artists, "\n"), "Artist A\nArtist B");
    assert_eq!(combine_artist_names(&[], ", "), "");
}

#[test]
fn test_sort_key() {
    // Lowercases
    assert_eq!(sort_key("Abbey Road"), "abbey road");

    // Strips a leading "The "
    assert_eq!(sort_key("The Beatles"), "beatles");
    assert_eq!(sort_key("the beatles"), "beatles");

    // Only a leading "The " is stripped
    assert_eq!(sort_key("Theodore"), "theodore");
    assert_eq!(sort_key("Rage Against The Machine"), "rage against the machine");
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track("id1", "Track 1", 1000, "Artist A"),
        create_test_track("id2", "Track 2", 2000, "Artist B"),
        create_test_track("id1", "Track 1 Duplicate", 1000, "Artist A"), // Duplicate
        create_test_track("id3", "Track 3", 3000, "Artist C"),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should contain the first occurrence of each unique ID
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_remove_duplicate_tracks_keeps_local_tracks() {
    // Local tracks have no id and must not be treated as duplicates of
    // each other
    let mut tracks = vec![
        create_test_track("", "Local 1", 1000, "Artist A"),
        create_test_track("", "Local 2", 2000, "Artist B"),
        create_test_track("id1", "Track 1", 3000, "Artist C"),
    ];

    remove_duplicate_tracks(&mut tracks);
    assert_eq!(tracks.len(), 3);
}

#[test]
fn test_sort_playlists_default_keeps_order() {
    let mut playlists = vec![
        create_test_playlist("p2", "Zebra"),
        create_test_playlist("p1", "Alpha"),
    ];

    sort_playlists(&mut playlists, &PlaylistOrder::Default, &[]);

    let ids: Vec<&String> = playlists.iter().map(|p| &p.id).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
}

#[test]
fn test_sort_playlists_alphabetical() {
    let mut playlists = vec![
        create_test_playlist("p1", "Zebra"),
        create_test_playlist("p2", "The Alpha"),
        create_test_playlist("p3", "beta"),
    ];

    sort_playlists(&mut playlists, &PlaylistOrder::Alphabetical, &[]);

    // "The " prefix is ignored, comparison is case-insensitive
    let names: Vec<&String> = playlists.iter().map(|p| &p.name).collect();
    assert_eq!(names, vec!["The Alpha", "beta", "Zebra"]);
}

#[test]
fn test_sort_playlists_custom() {
    let mut playlists = vec![
        create_test_playlist("p1", "One"),
        create_test_playlist("p2", "Two"),
        create_test_playlist("p3", "Three"),
        create_test_playlist("p4", "Four"),
    ];

    let custom_order = vec!["p3".to_string(), "p1".to_string()];
    sort_playlists(&mut playlists, &PlaylistOrder::Custom, &custom_order);

    // Listed ids first in their custom order, the rest keep their
    // original relative order at the end
    let ids: Vec<&String> = playlists.iter().map(|p| &p.id).collect();
    assert_eq!(ids, vec!["p3", "p1", "p2", "p4"]);
}

#[test]
fn test_relative_time() {
    let now = Utc.with_ymd_and_hms(2023, 10, 17, 12, 0, 0).unwrap();

    let same = Utc.with_ymd_and_hms(2023, 10, 17, 11, 59, 30).unwrap();
    assert_eq!(relative_time(same, now), "just now");

    let minutes = Utc.with_ymd_and_hms(2023, 10, 17, 11, 55, 0).unwrap();
    assert_eq!(relative_time(minutes, now), "5 minutes ago");

    let one_minute = Utc.with_ymd_and_hms(2023, 10, 17, 11, 59, 0).unwrap();
    assert_eq!(relative_time(one_minute, now), "1 minute ago");

    let hours = Utc.with_ymd_and_hms(2023, 10, 17, 9, 0, 0).unwrap();
    assert_eq!(relative_time(hours, now), "3 hours ago");

    let days = Utc.with_ymd_and_hms(2023, 10, 15, 12, 0, 0).unwrap();
    assert_eq!(relative_time(days, now), "2 days ago");

    let weeks = Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap();
    assert_eq!(relative_time(weeks, now), "2 weeks ago");

    let months = Utc.with_ymd_and_hms(2023, 7, 9, 12, 0, 0).unwrap();
    assert_eq!(relative_time(months, now), "3 months ago");

    let years = Utc.with_ymd_and_hms(2021, 8, 9, 12, 0, 0).unwrap();
    assert_eq!(relative_time(years, now), "2 years ago");
}

#[test]
fn test_format_added_at() {
    // Absolute formatting
    let formatted = format_added_at("2023-10-17T08:30:00Z", false);
    assert_eq!(formatted, "2023-10-17");

    // Unparsable or missing timestamps render empty
    assert_eq!(format_added_at("not-a-date", false), "");
    assert_eq!(format_added_at("", false), "");
    assert_eq!(format_added_at("", true), "");
}

#[test]
fn test_search_kind_display() {
    assert_eq!(SearchKind::Track.to_string(), "track");
    assert_eq!(SearchKind::Artist.to_string(), "artist");
    assert_eq!(SearchKind::Album.to_string(), "album");
    assert_eq!(SearchKind::Playlist.to_string(), "playlist");
}

#[test]
fn test_search_kinds_default() {
    let default_kinds = SearchKinds::default();
    let collected: Vec<SearchKind> = default_kinds.iter().collect();
    assert_eq!(
        collected,
        vec![
            SearchKind::Track,
            SearchKind::Artist,
            SearchKind::Album,
            SearchKind::Playlist
        ]
    );
}

#[test]
fn test_search_kinds_display() {
    // Test empty set (shouldn't happen in practice, but test the edge case)
    let empty_kinds = SearchKinds(BTreeSet::new());
    assert_eq!(empty_kinds.to_string(), "");

    // Test single kind
    let mut set = BTreeSet::new();
    set.insert(SearchKind::Album);
    let single_kind = SearchKinds(set);
    assert_eq!(single_kind.to_string(), "album");

    // Test multiple kinds (should be sorted)
    let mut set = BTreeSet::new();
    set.insert(SearchKind::Playlist);
    set.insert(SearchKind::Track);
    set.insert(SearchKind::Album);
    let multi_kinds = SearchKinds(set);
    assert_eq!(multi_kinds.to_string(), "track,album,playlist");
}

#[test]
fn test_parse_search_kinds_valid_inputs() {
    // Test single kind
    let result = parse_search_kinds("track").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track]);

    // Test multiple kinds
    let result = parse_search_kinds("track,album").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Album]);

    // Test "all" keyword
    let result = parse_search_kinds("all").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds.len(), 4);
    assert!(kinds.contains(&SearchKind::Track));
    assert!(kinds.contains(&SearchKind::Artist));
    assert!(kinds.contains(&SearchKind::Album));
    assert!(kinds.contains(&SearchKind::Playlist));

    // Test with spaces
    let result = parse_search_kinds("track, playlist").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Playlist]);

    // Test case insensitivity
    let result = parse_search_kinds("TRACK,Album").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Album]);
}

#[test]
fn test_parse_search_kinds_invalid_inputs() {
    // Test empty string
    let result = parse_search_kinds("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_search_kinds("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test invalid kind
    let result = parse_search_kinds("invalid_kind");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'invalid_kind'"));

    // Test malformed input (empty segment)
    let result = parse_search_kinds("track,,album");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("empty segment"));

    // Test mixed valid and invalid
    let result = parse_search_kinds("track,invalid,album");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'invalid'"));
}

#[test]
fn test_parse_search_kinds_deduplication() {
    // Test that duplicates are removed
    let result = parse_search_kinds("track,track,album").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Album]);
}

#[test]
fn test_search_kind_all_constant() {
    // Ensure ALL constant contains all variants
    assert_eq!(SearchKind::ALL.len(), 4);
    assert!(SearchKind::ALL.contains(&SearchKind::Track));
    assert!(SearchKind::ALL.contains(&SearchKind::Artist));
    assert!(SearchKind::ALL.contains(&SearchKind::Album));
    assert!(SearchKind::ALL.contains(&SearchKind::Playlist));
}
