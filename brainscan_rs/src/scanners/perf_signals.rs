//! Presence flags for runtime performance APIs. No counts, only "seen at
//! least once anywhere in the text".

use super::regexes::{
    regex_console_time, regex_dynamic_import, regex_intersection_observer, regex_performance_now,
    regex_request_idle_callback,
};
use crate::types::PerfSignals;

pub fn scan_perf_signals(src: &str) -> PerfSignals {
    PerfSignals {
        performance_now: regex_performance_now().is_match(src),
        request_idle_callback: regex_request_idle_callback().is_match(src),
        intersection_observer: regex_intersection_observer().is_match(src),
        console_time: regex_console_time().is_match(src),
        dynamic_import: regex_dynamic_import().is_match(src),
    }
}
