#[cfg(test)]
mod media_session_tests {
    use crate::common::fixtures::{buffered_to, live_metadata, video_metadata};
    use crate::common::mocks::{EngineCommand, FakeElement, Observed, RecordingObserver};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::thread;
    use vrbrowser_media::config::Config;
    use vrbrowser_media::media::{
        Media, MediaError, MediaEvent, PlaybackState, ReadyState, SharedObserver,
        media_event_channel,
    };
    use vrbrowser_media::ui::{MediaControls, PlayIcon, SeekBarMode};

    #[test]
    fn test_observer_receives_values_verbatim() {
        let media = Media::shared(Box::new(FakeElement::new()));
        let recorder = Rc::new(RefCell::new(RecordingObserver::default()));
        let observer: SharedObserver = recorder.clone();
        media.borrow_mut().attach(&observer);

        {
            let mut media = media.borrow_mut();
            media.notify_time(12.5);
            media.notify_volume(0.25, true);
            media.notify_ready_state(ReadyState::HaveMetadata);
            media.notify_playback_rate(2.0);
            media.notify_error(MediaError::SrcNotSupported);
        }

        assert_eq!(
            recorder.borrow().calls,
            vec![
                Observed::Time(12.5),
                Observed::Volume(0.25, true),
                Observed::ReadyState(ReadyState::HaveMetadata),
                Observed::Rate(2.0),
                Observed::Error(MediaError::SrcNotSupported),
            ]
        );

        media.borrow_mut().detach();
        media.borrow_mut().notify_time(20.0);
        assert_eq!(recorder.borrow().calls.len(), 5);
    }

    #[test]
    fn test_unload_makes_media_inert() {
        let element = FakeElement::new();
        let media = Media::shared(Box::new(element.clone()));
        let recorder = Rc::new(RefCell::new(RecordingObserver::default()));
        let observer: SharedObserver = recorder.clone();
        media.borrow_mut().attach(&observer);

        media.borrow_mut().unload();
        media.borrow_mut().notify_time(3.0);
        media.borrow_mut().notify_metadata(video_metadata(10.0));
        media.borrow().play();
        media.borrow().seek(4.0);

        assert!(recorder.borrow().calls.is_empty());
        assert!(element.commands().is_empty());
        assert_eq!(media.borrow().current_time(), 0.0);
        assert!(media.borrow().metadata().is_none());
    }

    #[test]
    fn test_engine_thread_to_controls() {
        let config = Config::default();
        let element = FakeElement::new();
        let media = Media::shared(Box::new(element.clone()));
        let controls = MediaControls::shared(&config.media_controls);
        MediaControls::set_media(&controls, Some(media.clone()));
        let (sender, mut pump) = media_event_channel(media.clone());

        let engine = sender.clone();
        thread::spawn(move || {
            engine.send(MediaEvent::MetadataChange(video_metadata(300.0)));
            engine.send(MediaEvent::LoadProgress(buffered_to(150.0)));
            engine.send(MediaEvent::TimeChange(75.0));
            engine.send(MediaEvent::PlaybackStateChange(PlaybackState::Playing));
        })
        .join()
        .unwrap();

        assert_eq!(controls.borrow().seek_bar().mode(), SeekBarMode::Disabled);
        assert_eq!(pump.drain(), 4);

        {
            let controls = controls.borrow();
            let seek_bar = controls.seek_bar();
            assert_eq!(seek_bar.mode(), SeekBarMode::Enabled);
            assert_eq!(seek_bar.left_label(), "1:15");
            assert_eq!(seek_bar.right_label(), "5:00");
            assert_eq!(seek_bar.progress(), 25);
            assert_eq!(seek_bar.secondary_progress(), 50);
            assert_eq!(controls.play_icon(), PlayIcon::Pause);
        }

        controls.borrow().toggle_play();
        controls.borrow().seek_forward();
        assert_eq!(
            element.commands(),
            vec![EngineCommand::Pause, EngineCommand::Seek(105.0)]
        );
    }

    #[test]
    fn test_drag_suppresses_engine_time_updates() {
        let media = Media::shared(Box::new(FakeElement::new()));
        let controls = MediaControls::shared(&Config::default().media_controls);
        media.borrow_mut().notify_metadata(video_metadata(100.0));
        MediaControls::set_media(&controls, Some(media.clone()));

        media.borrow_mut().notify_time(40.0);
        controls.borrow_mut().seek_bar_mut().start_tracking_touch();
        media.borrow_mut().notify_time(60.0);
        assert_eq!(controls.borrow().seek_bar().progress(), 40);

        controls.borrow_mut().seek_bar_mut().stop_tracking_touch();
        media.borrow_mut().notify_time(61.0);
        assert_eq!(controls.borrow().seek_bar().progress(), 61);
    }

    #[test]
    fn test_live_stream_then_vod() {
        let media = Media::shared(Box::new(FakeElement::new()));
        let controls = MediaControls::shared(&Config::default().media_controls);
        MediaControls::set_media(&controls, Some(media.clone()));

        media.borrow_mut().notify_metadata(live_metadata());
        assert_eq!(controls.borrow().seek_bar().mode(), SeekBarMode::Live);

        media.borrow_mut().notify_time(50.0);
        media.borrow_mut().notify_metadata(video_metadata(100.0));

        let controls = controls.borrow();
        assert_eq!(controls.seek_bar().mode(), SeekBarMode::Enabled);
        assert_eq!(controls.seek_bar().progress_fraction(), 0.5);
        assert_eq!(controls.seek_bar().left_label(), "0:50");
    }

    #[test]
    fn test_unloaded_media_stops_driving_controls() {
        let media = Media::shared(Box::new(FakeElement::new()));
        let controls = MediaControls::shared(&Config::default().media_controls);
        MediaControls::set_media(&controls, Some(media.clone()));
        let (sender, mut pump) = media_event_channel(media.clone());

        sender.send(MediaEvent::TimeChange(5.0));
        pump.drain();
        media.borrow_mut().unload();
        sender.send(MediaEvent::TimeChange(9.0));
        sender.send(MediaEvent::FullscreenChange(false));
        assert_eq!(pump.drain(), 2);

        let controls = controls.borrow();
        assert_eq!(controls.seek_bar().current_time(), 5.0);
        assert!(controls.is_visible());
    }
}
