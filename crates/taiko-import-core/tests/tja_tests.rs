//! Tests for line-format chart parsing
//!
//! Covers decoding from Shift-JIS bytes, title/volume normalization, course
//! detection and the highscore hash.

use encoding_rs::SHIFT_JIS;
use taiko_import_core::tja::{self, TjaDocument, content_hash};
use taiko_import_core::{Course, DifficultyTier, Error, SongContext, SongKind};

const FULL_CHART: &str = "TITLE:さくら feat. 初音ミク
TITLEEN:Sakura feat. Miku
SUBTITLE:--作曲者
SUBTITLEEN:++Composer
BPM:150
WAVE:song.ogg
OFFSET:-1.456
SONGVOL:120
SEVOL:100
DEMOSTART:42.25

COURSE:Easy
LEVEL:3
BALLOON:5
#START
1000,
#END

COURSE:2
LEVEL:6
#START
1010,
#END

COURSE:Oni
LEVEL:9
#START
1111,
#END

COURSE:4
LEVEL:10
#START
2222,
#END
";

fn parse(text: &str) -> taiko_import_core::Result<taiko_import_core::SongRecord> {
    tja::parse(&TjaDocument::from_text(text), SongContext::new(100, 2))
}

mod normalization {
    use super::*;

    #[test]
    fn test_feat_rewritten_to_ft() {
        let record = parse(FULL_CHART).unwrap();
        assert_eq!(record.title, "さくら ft. 初音ミク");
        assert!(!record.title.contains("feat"));
    }

    #[test]
    fn test_feat_rewrite_is_case_sensitive() {
        let record = parse("TITLE:Song Feat. X featfeat\nCOURSE:Oni\nLEVEL:1\n").unwrap();
        assert_eq!(record.title, "Song Feat. X ftft");
    }

    #[test]
    fn test_localized_fields_are_not_rewritten() {
        let record = parse(FULL_CHART).unwrap();
        assert_eq!(record.title_lang.en.as_deref(), Some("Sakura feat. Miku"));
        assert_eq!(record.subtitle_lang.en.as_deref(), Some("Composer"));
        assert_eq!(record.subtitle.as_deref(), Some("作曲者"));
    }

    #[test]
    fn test_volume_and_preview() {
        let record = parse(FULL_CHART).unwrap();
        assert_eq!(record.volume, 1.2);
        assert_eq!(record.preview, 42.25);
    }

    #[test]
    fn test_offset_is_always_zero() {
        let record = parse(FULL_CHART).unwrap();
        assert_eq!(record.offset, 0.0);
    }

    #[test]
    fn test_unparsable_songvol_defaults_to_one() {
        let record = parse("TITLE:x\nSONGVOL:loud\nCOURSE:Oni\nLEVEL:1\n").unwrap();
        assert_eq!(record.volume, 1.0);
    }

    #[test]
    fn test_volume_is_positive_for_any_songvol() {
        for songvol in ["0", "-30", "abc", "", "100", "5"] {
            let text = format!("TITLE:x\nSONGVOL:{}\nCOURSE:Oni\nLEVEL:1\n", songvol);
            let record = parse(&text).unwrap();
            assert!(record.volume > 0.0, "SONGVOL:{}", songvol);
        }
    }
}

mod courses {
    use super::*;

    #[test]
    fn test_all_tiers_by_name_and_ordinal() {
        let record = parse(FULL_CHART).unwrap();

        assert_eq!(record.courses.easy, Some(Course::new(3)));
        assert_eq!(record.courses.normal, None);
        assert_eq!(record.courses.hard, Some(Course::new(6)));
        assert_eq!(record.courses.oni, Some(Course::new(9)));
        assert_eq!(record.courses.ura, Some(Course::new(10)));
    }

    #[test]
    fn test_branch_is_never_set() {
        let record = parse(FULL_CHART).unwrap();
        assert!(record.courses.iter().all(|(_, course)| !course.branch));
    }

    #[test]
    fn test_example_end_to_end() {
        let record =
            parse("TITLE:Example feat. Artist\nCOURSE:ONI\nLEVEL:8\nSONGVOL:80\n").unwrap();

        assert_eq!(record.title, "Example ft. Artist");
        assert_eq!(record.volume, 0.8);
        assert_eq!(record.courses.get(DifficultyTier::Oni), Some(&Course::new(8)));
        for tier in [
            DifficultyTier::Easy,
            DifficultyTier::Normal,
            DifficultyTier::Hard,
            DifficultyTier::Ura,
        ] {
            assert!(record.courses.get(tier).is_none(), "{}", tier);
        }
    }

    #[test]
    fn test_no_courses_rejects_record() {
        let result = parse("TITLE:x\nLEVEL:5\n");
        assert!(matches!(result, Err(Error::NoCourses)));
    }
}

mod decoding {
    use super::*;

    #[test]
    fn test_shift_jis_bytes() {
        let (bytes, _, _) = SHIFT_JIS.encode("TITLE:千本桜\r\nSUBTITLE:--黒うさP\r\nCOURSE:Oni\r\nLEVEL:10\r\n");
        let document = TjaDocument::from_bytes(&bytes);
        let record = tja::parse(&document, SongContext::new(1, 1)).unwrap();

        assert_eq!(record.title, "千本桜");
        assert_eq!(record.subtitle.as_deref(), Some("黒うさP"));
        assert_eq!(record.courses.oni, Some(Course::new(10)));
        assert_eq!(record.kind, SongKind::Tja);
    }

    #[test]
    fn test_load_missing_file() {
        let result = TjaDocument::load("does/not/exist.tja");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

mod hashing {
    use super::*;

    #[test]
    fn test_hash_matches_document_text() {
        let record = parse(FULL_CHART).unwrap();
        assert_eq!(record.hash, content_hash(FULL_CHART));
    }

    #[test]
    fn test_hash_stable_across_runs() {
        let first = parse(FULL_CHART).unwrap();
        let second = parse(FULL_CHART).unwrap();
        assert_eq!(first.hash, second.hash);
    }

    #[test]
    fn test_hash_changes_with_content() {
        let first = parse(FULL_CHART).unwrap();
        let second = parse(&FULL_CHART.replace("LEVEL:9", "LEVEL:8")).unwrap();
        assert_ne!(first.hash, second.hash);
    }
}
