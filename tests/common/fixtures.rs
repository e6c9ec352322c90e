use vrbrowser_media::media::{LoadProgress, Metadata, TimeRange};
use vrbrowser_media::search::SearchEngine;

pub fn video_metadata(duration: f64) -> Metadata {
    Metadata {
        current_source: "https://media.example.com/360/tour.mp4".to_string(),
        width: 3840,
        height: 1920,
        duration,
        is_seekable: true,
        video_track_count: 1,
        audio_track_count: 1,
    }
}

pub fn live_metadata() -> Metadata {
    Metadata {
        current_source: "https://live.example.com/stream.m3u8".to_string(),
        duration: -1.0,
        is_seekable: false,
        ..video_metadata(0.0)
    }
}

pub fn buffered_to(end: f64) -> LoadProgress {
    LoadProgress {
        loaded_bytes: 1_048_576,
        total_bytes: -1,
        buffered: vec![TimeRange { start: 0.0, end }],
    }
}

pub fn test_engines(base_url: &str) -> Vec<SearchEngine> {
    vec![
        SearchEngine::new(
            "google",
            "Google",
            format!("{}/search?q={{searchTerms}}", base_url),
        )
        .with_suggestions(format!("{}/complete/search?q={{searchTerms}}", base_url)),
        SearchEngine::new(
            "yandex-ru",
            "Яндекс",
            "https://yandex.ru/search/?text={searchTerms}",
        ),
    ]
}
