//! Speech pacing in words per minute

use crate::text::Transcript;
use crate::{Criterion, Metric, SubScore};

/// Assumed rate when no duration is given
const BASELINE_WPM: f64 = 140.0;
/// Floor for estimated durations
const MIN_ESTIMATED_SECONDS: f64 = 10.0;

/// Score the speaking pace. When `duration` is absent the duration is
/// estimated from the word count at the baseline rate and the feedback is
/// flagged accordingly.
pub fn analyze(transcript: &Transcript, duration: Option<u32>) -> SubScore {
    let word_count = transcript.word_count() as f64;

    let (duration_seconds, estimated) = match duration {
        Some(secs) => (secs as f64, false),
        None => (
            (word_count / BASELINE_WPM * 60.0).max(MIN_ESTIMATED_SECONDS),
            true,
        ),
    };

    let wpm = word_count / duration_seconds * 60.0;

    let (score, label) = if (111.0..=140.0).contains(&wpm) {
        (10, "Ideal speech rate")
    } else if (141.0..=160.0).contains(&wpm) {
        (6, "Fast speech rate")
    } else if (81.0..=110.0).contains(&wpm) {
        (6, "Slow speech rate")
    } else if wpm > 160.0 {
        (2, "Too fast")
    } else {
        (2, "Too slow")
    };

    let mut feedback = format!("{label}: {wpm:.1} WPM");
    if score == 6 {
        if wpm > 140.0 {
            feedback.push_str(". Try speaking a bit slower for better clarity");
        } else {
            feedback.push_str(". Try speaking a bit faster to maintain engagement");
        }
    } else if score == 2 {
        if wpm > 160.0 {
            feedback.push_str(". Slow down significantly for better understanding");
        } else {
            feedback.push_str(". Increase your speaking pace considerably");
        }
    }
    if estimated {
        feedback.push_str(" (estimated duration)");
    }

    SubScore::new(Criterion::SpeechRate, score, feedback).with_metric(Metric::Wpm(wpm))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Transcript {
        Transcript::new(&vec!["word"; n].join(" ")).unwrap()
    }

    fn wpm_of(sub: &SubScore) -> f64 {
        match sub.metric {
            Some(Metric::Wpm(wpm)) => wpm,
            other => panic!("expected WPM metric, got {other:?}"),
        }
    }

    #[test]
    fn ideal_band_boundaries() {
        // 111 words in 60s and 140 words in 60s are both ideal
        assert_eq!(analyze(&words(111), Some(60)).score, 10);
        assert_eq!(analyze(&words(140), Some(60)).score, 10);
    }

    #[test]
    fn just_below_ideal_is_slow() {
        let sub = analyze(&words(110), Some(60));
        assert_eq!(sub.score, 6);
        assert!(sub.feedback.contains("Slow speech rate"));
        assert!(sub.feedback.contains("a bit faster"));
    }

    #[test]
    fn just_above_fast_band_is_too_fast() {
        let sub = analyze(&words(161), Some(60));
        assert_eq!(sub.score, 2);
        assert!(sub.feedback.contains("Too fast"));
        assert!(sub.feedback.contains("Slow down significantly"));
    }

    #[test]
    fn very_slow_pace() {
        let sub = analyze(&words(40), Some(60));
        assert_eq!(sub.score, 2);
        assert!(sub.feedback.contains("Too slow"));
        assert!(sub.feedback.contains("considerably"));
    }

    #[test]
    fn estimated_duration_from_word_count() {
        // 70 words at the 140 WPM baseline gives 30 seconds, above the floor
        let sub = analyze(&words(70), None);
        assert!((wpm_of(&sub) - 140.0).abs() < 1e-9);
        assert_eq!(sub.score, 10);
        assert!(sub.feedback.contains("(estimated duration)"));
    }

    #[test]
    fn estimated_duration_floored_at_ten_seconds() {
        // 7 words would estimate 3s; the floor pushes it to 10s -> 42 WPM
        let sub = analyze(&words(7), None);
        assert!((wpm_of(&sub) - 42.0).abs() < 1e-9);
        assert!(sub.feedback.contains("(estimated duration)"));
    }

    #[test]
    fn explicit_duration_is_not_flagged_as_estimated() {
        let sub = analyze(&words(120), Some(60));
        assert!(!sub.feedback.contains("estimated"));
    }

    #[test]
    fn feedback_includes_numeric_wpm() {
        let sub = analyze(&words(120), Some(60));
        assert!(sub.feedback.contains("120.0 WPM"));
    }
}
