mod tests {
    use core::net::Ipv4Addr;

    use embassy_time::Instant;
    use wordclock_composer::CellIndex;
    use wordclock_composer::grid::{BUILTIN_VARIANTS, GridVariant};
    use wordclock_composer::power_on::{
        AddressFrame, PowerOnSequence, PowerOnState, encode_address,
    };

    const ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 5);

    fn nl_v4() -> &'static GridVariant {
        &BUILTIN_VARIANTS[3]
    }

    fn update(sequence: &mut PowerOnSequence, ms: u64) -> Vec<CellIndex> {
        sequence
            .update(Instant::from_millis(ms), nl_v4(), &ADDRESS)
            .to_vec()
    }

    fn labels(frames: &[AddressFrame]) -> String {
        frames.iter().map(AddressFrame::label).collect()
    }

    #[test]
    fn test_encode_address() {
        let variant = nl_v4();
        let frames = encode_address(variant, ADDRESS);
        assert_eq!(labels(&frames), "192.168.1.5");

        let separators = frames
            .iter()
            .filter(|frame| matches!(frame, AddressFrame::Separator(_)))
            .count();
        assert_eq!(separators, 3);
        assert_eq!(frames[3].cells(), variant.extra_minutes);
        assert_eq!(frames[0].cells(), [122, 121, 120]);
        assert_eq!(frames[1].cells(), [120, 119, 118, 117, 116]);
        assert_eq!(
            frames.last().map(AddressFrame::cells),
            Some(&[128, 129, 130, 131][..])
        );
    }

    #[test]
    fn test_encode_zeros() {
        let variant = nl_v4();
        let frames = encode_address(variant, Ipv4Addr::new(10, 0, 100, 7));
        assert_eq!(labels(&frames), "10.0.100.7");
        assert_eq!(frames[1], AddressFrame::Zero(42));
        assert_eq!(frames[1].cells(), [42]);

        let frames = encode_address(variant, Ipv4Addr::UNSPECIFIED);
        assert_eq!(labels(&frames), "0.0.0.0");
        assert_eq!(frames.len(), 7);
    }

    #[test]
    fn test_zero_cell_per_variant() {
        let zeros: Vec<CellIndex> = BUILTIN_VARIANTS
            .iter()
            .map(|variant| encode_address(variant, Ipv4Addr::UNSPECIFIED)[0].cells()[0])
            .collect();
        assert_eq!(zeros, [56, 45, 45, 42, 56]);
    }

    #[test]
    fn test_idle_until_started() {
        let mut sequence = PowerOnSequence::default();
        assert_eq!(sequence.state(), PowerOnState::Done);
        assert!(!sequence.is_running());
        assert!(update(&mut sequence, 100).is_empty());
    }

    #[test]
    fn test_full_timeline() {
        let mut sequence = PowerOnSequence::default();
        let total = nl_v4().total_cells();
        sequence.start(Instant::from_millis(0));
        assert!(sequence.is_running());

        // Too early for the first cell
        assert!(update(&mut sequence, 10).is_empty());

        for cell in 0..total - 1 {
            let ms = u64::from(cell + 1) * 20;
            assert_eq!(update(&mut sequence, ms), [cell]);
            assert_eq!(sequence.state(), PowerOnState::Sweep);
        }

        // The last sweep step already shows the first digit
        let sweep_end = u64::from(total) * 20;
        assert_eq!(update(&mut sequence, sweep_end), [122, 121, 120]);
        assert_eq!(sequence.state(), PowerOnState::AddressDigits);
        assert_eq!(labels(sequence.frames()), "192.168.1.5");

        // Frames hold until the next step
        assert_eq!(update(&mut sequence, sweep_end + 999), [122, 121, 120]);

        let frames: Vec<AddressFrame> = sequence.frames().to_vec();
        for (step, frame) in frames.iter().enumerate().skip(1) {
            let ms = sweep_end + step as u64 * 1_000;
            assert_eq!(update(&mut sequence, ms), frame.cells());
        }
        assert_eq!(sequence.state(), PowerOnState::AddressHoldLast);

        let last_frame = sweep_end + 10_000;
        assert_eq!(update(&mut sequence, last_frame + 999), [128, 129, 130, 131]);
        assert!(update(&mut sequence, last_frame + 1_000).is_empty());
        assert_eq!(sequence.state(), PowerOnState::Pause);

        assert!(update(&mut sequence, last_frame + 2_999).is_empty());
        assert!(sequence.is_running());
        assert!(update(&mut sequence, last_frame + 3_000).is_empty());
        assert_eq!(sequence.state(), PowerOnState::Done);
        assert!(!sequence.is_running());
    }

    #[test]
    fn test_restart_mid_sequence() {
        let mut sequence = PowerOnSequence::default();
        sequence.start(Instant::from_millis(0));
        for ms in (20..=1_000).step_by(20) {
            update(&mut sequence, ms);
        }

        sequence.start(Instant::from_millis(2_000));
        assert_eq!(sequence.state(), PowerOnState::Sweep);
        assert!(sequence.frames().is_empty());
        assert_eq!(update(&mut sequence, 2_020), [0]);
    }
}
