use sptcli::management::{
    Palette, PlaylistOrder, PlaylistsManager, Settings, TrackListManager,
};
use sptcli::types::{Playlist, PlaylistOwner, Track};

fn create_test_track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        duration: 1000,
        album: None,
        artists: Vec::new(),
        is_local: false,
        is_playable: true,
        added_at: String::new(),
    }
}

fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        owner: PlaylistOwner {
            id: "owner".to_string(),
            display_name: "Owner".to_string(),
        },
        public: None,
        collaborative: false,
        snapshot_id: String::new(),
        tracks: None,
    }
}

#[test]
fn test_track_list_manager_returns_latest_stored_list() {
    let mut mgr = TrackListManager::new(
        "playlist1".to_string(),
        Some(vec![create_test_track("t1", "Old One")]),
    );
    assert_eq!(mgr.count(), 1);

    // A refresh replaces the whole list; the latest stored list wins
    mgr.set_tracks(vec![
        create_test_track("t2", "New One"),
        create_test_track("t3", "New Two"),
    ]);

    let tracks = mgr.get_tracks();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "t2");
    assert_eq!(tracks[1].id, "t3");

    // Storing again overwrites once more
    mgr.set_tracks(vec![create_test_track("t4", "Newest")]);
    let tracks = mgr.get_tracks();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "t4");
}

#[test]
fn test_track_list_manager_empty_and_id() {
    let mgr = TrackListManager::new("album1".to_string(), None);
    assert_eq!(mgr.count(), 0);
    assert!(mgr.get_tracks().is_empty());
    assert_eq!(mgr.id(), "album1");
}

#[test]
fn test_playlists_manager_find() {
    let mgr = PlaylistsManager::new(Some(vec![
        create_test_playlist("p1", "Morning"),
        create_test_playlist("p2", "Evening"),
    ]));

    assert_eq!(mgr.count(), 2);
    assert_eq!(mgr.find("p2").map(|p| p.name), Some("Evening".to_string()));
    assert!(mgr.find("p3").is_none());
}

#[test]
fn test_playlists_manager_overwrite() {
    let mut mgr = PlaylistsManager::new(Some(vec![create_test_playlist("p1", "Morning")]));

    mgr.set_playlists(vec![
        create_test_playlist("p2", "Evening"),
        create_test_playlist("p3", "Night"),
    ]);

    assert_eq!(mgr.count(), 2);
    assert!(mgr.find("p1").is_none());
    assert!(mgr.find("p2").is_some());
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.style_palette, Palette::App);
    assert_eq!(settings.playlist_order, PlaylistOrder::Default);
    assert!(settings.relative_added);
    assert!(settings.track_numbers);
    assert!(settings.fixed_width_time);
    assert!(!settings.fallback_icons);
    assert_eq!(settings.song_header_sort_by, -1);
    assert_eq!(settings.refresh_interval, 3);
    assert!(settings.last_playlist.is_empty());
    assert!(settings.custom_playlist_order.is_empty());
}

#[test]
fn test_settings_partial_json_fills_defaults() {
    // Older settings files may miss newer fields; they fall back to
    // defaults instead of failing to parse
    let payload = r#"{
        "style_palette": "dark",
        "playlist_order": "alphabetical",
        "last_playlist": "p1"
    }"#;

    let settings: Settings = serde_json::from_str(payload).unwrap();
    assert_eq!(settings.style_palette, Palette::Dark);
    assert_eq!(settings.playlist_order, PlaylistOrder::Alphabetical);
    assert_eq!(settings.last_playlist, "p1");

    // Untouched fields keep their defaults
    assert!(settings.relative_added);
    assert_eq!(settings.refresh_interval, 3);
}

#[test]
fn test_settings_roundtrip() {
    let mut settings = Settings::default();
    settings.style_palette = Palette::Style;
    settings.playlist_order = PlaylistOrder::Custom;
    settings.custom_playlist_order = vec!["p2".to_string(), "p1".to_string()];
    settings.last_volume = 15;
    settings.window_width = 1280;
    settings.window_height = 720;

    let json = serde_json::to_string_pretty(&settings).unwrap();
    let parsed: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.style_palette, Palette::Style);
    assert_eq!(parsed.playlist_order, PlaylistOrder::Custom);
    assert_eq!(parsed.custom_playlist_order, vec!["p2", "p1"]);
    assert_eq!(parsed.last_volume, 15);
    assert_eq!(parsed.window_width, 1280);
    assert_eq!(parsed.window_height, 720);
}

#[test]
fn test_palette_wire_format() {
    assert_eq!(serde_json::to_string(&Palette::App).unwrap(), "\"app\"");
    assert_eq!(serde_json::to_string(&Palette::Dark).unwrap(), "\"dark\"");
    assert_eq!(
        serde_json::to_string(&PlaylistOrder::Alphabetical).unwrap(),
        "\"alphabetical\""
    );
}
