//! Unit tests for bag-util helpers.

#[cfg(test)]
mod slice {
    use crate::slice;

    #[test]
    fn contains_hit_and_miss() {
        let haystack = ["alpha", "beta", "gamma"];
        assert!(slice::contains(&haystack, &"beta"));
        assert!(!slice::contains(&haystack, &"delta"));
        assert!(!slice::contains::<&str>(&[], &"anything"));
    }

    #[test]
    fn exclusion_splits_both_ways() {
        let source = [1, 2, 3, 4];
        let reference = [3, 4, 5, 6];
        let (mut only_source, mut only_reference) = slice::exclusion(&source, &reference);
        only_source.sort();
        only_reference.sort();
        assert_eq!(only_source, vec![1, 2]);
        assert_eq!(only_reference, vec![5, 6]);
    }

    #[test]
    fn exclusion_of_identical_slices_is_empty() {
        let (a, b) = slice::exclusion(&[1, 2, 3], &[3, 2, 1]);
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn exclusion_collapses_duplicates() {
        let (mut a, b) = slice::exclusion(&["x", "x", "y"], &["y"]);
        a.sort();
        assert_eq!(a, vec!["x"]);
        assert!(b.is_empty());
    }

    #[test]
    fn intersection_common_elements() {
        let mut common = slice::intersection(&[1, 2, 3, 4], &[3, 4, 5]);
        common.sort();
        assert_eq!(common, vec![3, 4]);
    }

    #[test]
    fn intersection_disjoint_is_empty() {
        assert!(slice::intersection(&[1, 2], &[3, 4]).is_empty());
        assert!(slice::intersection::<i32>(&[], &[1]).is_empty());
    }

    #[test]
    fn unique_preserves_first_occurrence_order() {
        assert_eq!(
            slice::unique(&[3, 1, 3, 2, 1, 3]),
            vec![3, 1, 2]
        );
        assert_eq!(
            slice::unique(&["b", "a", "b"]),
            vec!["b", "a"]
        );
        assert!(slice::unique::<u8>(&[]).is_empty());
    }
}

#[cfg(test)]
mod text {
    use crate::text;

    #[test]
    fn blank_detection() {
        assert!(text::is_blank(""));
        assert!(text::is_blank("   "));
        assert!(text::is_blank("\t \n"));
        assert!(!text::is_blank(" x "));
    }

    #[test]
    fn remove_blank_in_place() {
        let mut values: Vec<String> = ["a", "b", "  ", "c"].map(String::from).into();
        text::remove_blank(&mut values);
        assert_eq!(values, vec!["a", "b", "c"]);

        let mut all_blank: Vec<String> = ["", "", "  ", ""].map(String::from).into();
        text::remove_blank(&mut all_blank);
        assert!(all_blank.is_empty());
    }

    #[test]
    fn snake_case_table() {
        let cases = [
            ("testCase", "test_case"),
            ("TestCase", "test_case"),
            ("Test Case", "test_case"),
            (" Test Case", "test_case"),
            ("Test Case ", "test_case"),
            (" Test Case ", "test_case"),
            ("test", "test"),
            ("test_case", "test_case"),
            ("Test", "test"),
            ("", ""),
            ("ManyManyWords", "many_many_words"),
            ("manyManyWords", "many_many_words"),
            ("AnyKind of_string", "any_kind_of_string"),
            ("numbers2and55with000", "numbers_2_and_55_with_000"),
            ("Foo/Boo", "foo_or_boo"),
            ("Foo/Boo/Moo", "foo_or_boo_or_moo"),
        ];
        for (input, expected) in cases {
            assert_eq!(text::snake_case(input), expected, "input {input:?}");
        }
    }
}

#[cfg(test)]
mod fs {
    use std::fs as stdfs;

    use crate::fs;

    #[test]
    fn writes_content_under_prefix() {
        let base = tempfile::tempdir().unwrap();
        let path = fs::write_file_under(base.path(), "bagtest", "data.bin", b"hello").unwrap();
        assert_eq!(path, base.path().join("bagtest").join("data.bin"));
        assert_eq!(stdfs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn overwrites_existing_file() {
        let base = tempfile::tempdir().unwrap();
        fs::write_file_under(base.path(), "bagtest", "data.bin", b"first").unwrap();
        let path = fs::write_file_under(base.path(), "bagtest", "data.bin", b"second").unwrap();
        assert_eq!(stdfs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn empty_content_creates_empty_file() {
        let base = tempfile::tempdir().unwrap();
        let path = fs::write_file_under(base.path(), "bagtest", "empty", b"").unwrap();
        assert_eq!(stdfs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn temp_dir_entry_point() {
        let path = fs::write_temp_file(b"payload", "bag-util-test", "entry.txt").unwrap();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(stdfs::read(&path).unwrap(), b"payload");
        let _ = stdfs::remove_dir_all(std::env::temp_dir().join("bag-util-test"));
    }
}
