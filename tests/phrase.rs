mod tests {
    use wordclock_composer::CellSet;
    use wordclock_composer::grid::BUILTIN_VARIANTS;
    use wordclock_composer::phrase::{
        HOUR_WORDS, PREFIX_WORDS, bucket, compile_phrase, hour_word, phrase_segments,
    };

    fn words(hour: u8, minute: u8) -> Vec<&'static str> {
        phrase_segments(hour, minute).iter().copied().collect()
    }

    #[test]
    fn test_rounding_and_extra_ticks() {
        for minute in 0..60 {
            let phrase = compile_phrase(9, minute);
            assert_eq!(phrase.extra_ticks, minute % 5);
            assert_eq!(bucket(minute).rounded_minute, minute - minute % 5);
        }
    }

    #[test]
    fn test_prefix_and_length() {
        for hour in 0..24 {
            for minute in 0..60 {
                let segments = phrase_segments(hour, minute);
                assert_eq!(&segments[..2], &PREFIX_WORDS[..]);
                assert!(segments.len() >= 3, "{hour}:{minute} too short");
            }
        }
    }

    #[test]
    fn test_next_hour_rule() {
        assert_eq!(hour_word(14, 15), "TWEE");
        assert_eq!(hour_word(14, 20), "DRIE");
        assert_eq!(hour_word(11, 45), "TWAALF");
        assert_eq!(hour_word(0, 0), "TWAALF");
        assert_eq!(hour_word(23, 55), "TWAALF");
        for hour in 0..12 {
            assert_eq!(hour_word(hour, 0), HOUR_WORDS[usize::from(hour)]);
        }
    }

    #[test]
    fn test_bucket_patterns() {
        assert_eq!(words(14, 0), ["HET", "IS", "TWEE", "UUR"]);
        assert_eq!(words(14, 5), ["HET", "IS", "VIJF_M", "OVER", "TWEE"]);
        assert_eq!(words(14, 10), ["HET", "IS", "TIEN_M", "OVER", "TWEE"]);
        assert_eq!(words(14, 15), ["HET", "IS", "KWART", "OVER", "TWEE"]);
        assert_eq!(words(14, 20), ["HET", "IS", "TIEN_M", "VOOR", "HALF", "DRIE"]);
        assert_eq!(words(14, 25), ["HET", "IS", "VIJF_M", "VOOR", "HALF", "DRIE"]);
        assert_eq!(words(14, 30), ["HET", "IS", "HALF", "DRIE"]);
        assert_eq!(words(14, 35), ["HET", "IS", "VIJF_M", "OVER", "HALF", "DRIE"]);
        assert_eq!(words(14, 40), ["HET", "IS", "TIEN_M", "OVER", "HALF", "DRIE"]);
        assert_eq!(words(14, 45), ["HET", "IS", "KWART", "VOOR", "DRIE"]);
        assert_eq!(words(14, 50), ["HET", "IS", "TIEN_M", "VOOR", "DRIE"]);
        assert_eq!(words(14, 55), ["HET", "IS", "VIJF_M", "VOOR", "DRIE"]);
    }

    #[test]
    fn test_quarter_to_three() {
        let phrase = compile_phrase(14, 47);
        assert_eq!(
            phrase.segments.as_slice(),
            ["HET", "IS", "KWART", "VOOR", "DRIE"]
        );
        assert_eq!(phrase.extra_ticks, 2);
    }

    #[test]
    fn test_out_of_range_minutes() {
        // 60..64 wrap into the next hour
        assert_eq!(words(9, 62), ["HET", "IS", "TIEN", "UUR"]);
        assert_eq!(compile_phrase(9, 62).extra_ticks, 2);
        assert_eq!(words(23, 60), ["HET", "IS", "TWAALF", "UUR"]);
        // No pattern past that
        assert_eq!(words(9, 70), ["HET", "IS"]);
        // Hours wrap around the day
        assert_eq!(words(25, 0), ["HET", "IS", "EEN", "UUR"]);
    }

    #[test]
    fn test_collect_cells() {
        let variant = &BUILTIN_VARIANTS[3];
        let phrase = compile_phrase(14, 47);

        let mut cells = CellSet::new();
        phrase.collect_cells(variant, true, &mut cells);
        assert_eq!(
            cells.as_slice(),
            [
                10, 9, 8, 6, 5, 32, 31, 30, 29, 28, 63, 62, 61, 60, 70, 71, 72, 73, 150, 148
            ]
        );

        cells.clear();
        phrase.collect_cells(variant, false, &mut cells);
        assert_eq!(
            cells.as_slice(),
            [32, 31, 30, 29, 28, 63, 62, 61, 60, 70, 71, 72, 73, 150, 148]
        );
    }

    #[test]
    fn test_collect_cells_all_ticks() {
        let variant = &BUILTIN_VARIANTS[0];
        let mut cells = CellSet::new();
        compile_phrase(8, 4).collect_cells(variant, false, &mut cells);
        assert_eq!(
            cells.as_slice(),
            [128, 129, 130, 131, 138, 137, 136, 153, 155, 157, 159]
        );
    }
}
