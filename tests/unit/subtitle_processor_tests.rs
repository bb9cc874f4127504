/*!
 * Tests for caption parsing and rendering
 */

use srtshift::RunContext;
use srtshift::subtitle_processor::{Caption, CaptionSequence};
use crate::common;

/// Test parsing SRT string content
#[test]
fn test_parse_srt_string_withValidContent_shouldParseCorrectly() {
    let ctx = RunContext::new();
    let seq = CaptionSequence::parse_srt_string(common::SAMPLE_SRT, &ctx);

    assert_eq!(seq.len(), 3);
    assert!(seq.uses_comma);
    assert!(seq.dangling.is_none());

    assert_eq!(seq.captions[0].index, "1");
    assert_eq!(seq.captions[0].start, ctx.at(0, 0, 1, 0));
    assert_eq!(seq.captions[0].end, ctx.at(0, 0, 4, 0));
    assert_eq!(seq.captions[0].text, "This is a test subtitle.");

    assert_eq!(seq.captions[1].text, "It contains multiple entries.\nOver two lines.");
    assert_eq!(seq.captions[2].format_end_time(), "00:00:14.000");
}

/// Test that dot-separated files do not switch to commas
#[test]
fn test_parse_srt_string_withDotSeparator_shouldNotSetCommaFlag() {
    let content = "1\n00:00:01.250 --> 00:00:02.500\nHello\n\n";
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());

    assert!(!seq.uses_comma);
    assert_eq!(seq.captions[0].format_start_time(), "00:00:01.250");
}

/// Test that one comma anywhere switches the whole file to commas
#[test]
fn test_render_srt_withMixedSeparators_shouldUseCommaEverywhere() {
    let content = "1\n00:00:01.000 --> 00:00:02.000\nA\n\n2\n00:00:03,000 --> 00:00:04,000\nB\n\n";
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());
    let rendered = seq.render_srt();

    let stamps = common::timestamps(&rendered);
    assert_eq!(stamps.len(), 4);
    assert!(stamps.iter().all(|s| s.contains(',') && !s.contains('.')));
}

/// Test Windows line endings and a byte-order mark
#[test]
fn test_parse_srt_string_withBomAndCrlf_shouldParseCleanly() {
    let content = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,000\r\nHi\r\n\r\n";
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());

    assert_eq!(seq.len(), 1);
    assert_eq!(seq.captions[0].index, "1");
    assert_eq!(seq.captions[0].text, "Hi");
}

/// Test that the last caption is dropped when no blank line follows it
#[test]
fn test_parse_srt_string_withoutTrailingBlankLine_shouldDropLastCaption() {
    let content = common::SAMPLE_SRT.trim_end();
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());

    assert_eq!(seq.len(), 2);
    assert_eq!(seq.dangling.as_ref().map(|c| c.index.as_str()), Some("3"));
    assert!(!seq.render_srt().contains("For testing purposes."));
}

/// Test that caption numbers are kept verbatim, not renumbered
#[test]
fn test_parse_srt_string_withUnorderedIndexes_shouldPreserveOrderAndLabels() {
    let content = "10\n00:00:05.000 --> 00:00:06.000\nB\n\n007\n00:00:01.000 --> 00:00:02.000\nA\n\n";
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());

    let indexes: Vec<&str> = seq.captions.iter().map(|c| c.index.as_str()).collect();
    assert_eq!(indexes, vec!["10", "007"]);
}

/// Test that garbage input degrades instead of failing
#[test]
fn test_parse_srt_string_withGarbage_shouldNotPanic() {
    let content = "hello\nworld\n\n--> -->\n\n";
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());

    assert_eq!(seq.len(), 2);
    assert_eq!(seq.captions[0].index, "");
    assert_eq!(seq.captions[0].text, "hello\nworld");
}

/// Test caption rendering
#[test]
fn test_render_srt_withCommaFlag_shouldMatchSourceLayout() {
    let ctx = RunContext::new();
    let mut seq = CaptionSequence::new();
    seq.uses_comma = true;
    seq.captions.push(Caption::new("1", ctx.at(0, 1, 2, 30), ctx.at(0, 1, 5, 0), "Line one\nLine two"));

    assert_eq!(seq.render_srt(), "1\n00:01:02,030 --> 00:01:05,000\nLine one\nLine two\n\n");
}

/// Test timestamp field extraction
#[test]
fn test_clock_fields_withVariousStamps_shouldValidateRanges() {
    assert_eq!(CaptionSequence::clock_fields("01:23:45.678"), Some((1, 23, 45, 678)));
    assert_eq!(CaptionSequence::clock_fields("01:23:45,678"), None);
    assert_eq!(CaptionSequence::clock_fields("24:00:00.000"), None);
    assert_eq!(CaptionSequence::clock_fields("00:00:60.000"), None);
    assert_eq!(CaptionSequence::clock_fields("00:00:05.0"), None);
}

/// Test body lines made of non-ASCII digits stay body text
#[test]
fn test_parse_srt_string_withNonAsciiDigitLine_shouldKeepItAsText() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nThe code is\n\u{0661}\u{0662}\u{0663}\n\n";
    let seq = CaptionSequence::parse_srt_string(content, &RunContext::new());

    assert_eq!(seq.len(), 1);
    assert_eq!(seq.captions[0].index, "1");
    assert_eq!(seq.captions[0].format_end_time(), "00:00:02.000");
    assert_eq!(seq.captions[0].text, "The code is\n\u{0661}\u{0662}\u{0663}");
}
