mod tests {
    use core::net::Ipv4Addr;

    use embassy_time::{Duration, Instant};
    use smart_leds::{RGB8, SmartLedsWrite};
    use wordclock_composer::{
        CellIndex, ClockConfig, DisplayDriver, FrameScheduler, IntentChannel, StripDisplay,
        WallTime, WordClock,
    };

    const AMBER: RGB8 = RGB8 { r: 255, g: 140, b: 0 };
    const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

    #[derive(Default)]
    struct RecordingWriter {
        frames: Vec<Vec<RGB8>>,
        fail: bool,
    }

    impl SmartLedsWrite for RecordingWriter {
        type Error = &'static str;
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            if self.fail { Err("bus error") } else { Ok(()) }
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Vec<Vec<CellIndex>>,
    }

    impl DisplayDriver for RecordingDisplay {
        fn show(&mut self, cells: &[CellIndex]) {
            self.shown.push(cells.to_vec());
        }
    }

    #[test]
    fn test_strip_paints_cells() {
        let mut display: StripDisplay<_, 4> =
            StripDisplay::with_color(RecordingWriter::default(), AMBER);

        display.show(&[0, 2]);
        assert_eq!(display.frame(), &[AMBER, OFF, AMBER, OFF]);

        display.show(&[3]);
        assert_eq!(display.writer().frames.len(), 2);
        assert_eq!(display.writer().frames[1], [OFF, OFF, OFF, AMBER]);
    }

    #[test]
    fn test_strip_ignores_out_of_range_cells() {
        let mut display: StripDisplay<_, 4> =
            StripDisplay::with_color(RecordingWriter::default(), AMBER);

        display.show(&[1, 4, 150, CellIndex::MAX]);
        assert_eq!(display.frame(), &[OFF, AMBER, OFF, OFF]);
    }

    #[test]
    fn test_strip_swallows_write_errors() {
        let writer = RecordingWriter {
            fail: true,
            ..RecordingWriter::default()
        };
        let mut display: StripDisplay<_, 2> = StripDisplay::new(writer);

        display.show(&[0]);
        display.show(&[1]);
        assert_eq!(display.writer().frames.len(), 2);

        display.set_color(AMBER);
        display.show(&[1]);
        assert_eq!(display.frame(), &[OFF, AMBER]);
    }

    #[test]
    fn test_scheduler_paces_ticks() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let clock = WordClock::new(channel.receiver(), &ClockConfig::DEFAULT);
        let time = || WallTime::new(14, 47);
        let mut scheduler = FrameScheduler::new(
            clock,
            RecordingDisplay::default(),
            time,
            Ipv4Addr::UNSPECIFIED,
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(50));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));

        let result = scheduler.tick(Instant::from_millis(60));
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(40));

        // A long stall skips the backlog
        let result = scheduler.tick(Instant::from_millis(1_000));
        assert_eq!(result.next_deadline, Instant::from_millis(1_050));

        let shown = &scheduler.display().shown;
        assert_eq!(shown.len(), 3);
        assert!(!shown[0].is_empty());
        assert!(shown.iter().all(|cells| *cells == shown[0]));
    }

    #[test]
    fn test_scheduler_without_time() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let clock = WordClock::new(channel.receiver(), &ClockConfig::DEFAULT);
        let mut scheduler = FrameScheduler::with_tick_duration(
            clock,
            RecordingDisplay::default(),
            || -> Option<WallTime> { None },
            Ipv4Addr::UNSPECIFIED,
            Duration::from_millis(100),
        );

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.display().shown[0], [150, 148, 146, 144]);
        assert_eq!(scheduler.clock().active_variant().key, "NL_V4");
    }
}
