use luterm::text::{align_offset, display_width, truncate_to_width};
use luterm::TextAlign;

#[test]
fn test_display_width_ascii_and_wide() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width("数据"), 4);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("exact", 5), "exact");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("Ann Example", 6), "Ann E…");
    assert_eq!(truncate_to_width("anything", 1), "…");
    assert_eq!(truncate_to_width("anything", 0), "");
}

#[test]
fn test_truncate_wide_chars_do_not_overflow() {
    let out = truncate_to_width("数据数据", 4);
    assert!(display_width(&out) <= 4);
    assert!(out.ends_with('…'));
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(3, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(3, 10, TextAlign::Right), 7);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}
