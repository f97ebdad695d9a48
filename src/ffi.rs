//! C bindings for the HTP analyzer
//!
//! Strings cross the boundary as null-terminated UTF-8. Every string handed
//! back to the caller is heap-allocated and must be released with
//! `htp_free_string`. A NULL return means failure; the reason is available
//! from `htp_last_error` on the same thread.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::pipeline::{analyze_drawing, DrawingAnalyzer};

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn record_error(message: &str) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = CString::new(message).ok());
}

fn reset_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Borrow a caller string as UTF-8; `None` for NULL or invalid UTF-8
unsafe fn read_str<'a>(raw: *const c_char) -> Option<&'a str> {
    if raw.is_null() {
        None
    } else {
        CStr::from_ptr(raw).to_str().ok()
    }
}

/// Hand a report to the caller, or record the error and return NULL
fn into_c_result(result: Result<String, AnalysisError>) -> *mut c_char {
    match result {
        Ok(json) => CString::new(json)
            .map(CString::into_raw)
            .unwrap_or(ptr::null_mut()),
        Err(e) => {
            record_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Analyze a submission and return the report JSON.
///
/// # Safety
/// `json` must be NULL or point to a null-terminated string. The result is
/// owned by the caller (`htp_free_string`); NULL signals an error.
#[no_mangle]
pub unsafe extern "C" fn htp_analyze(json: *const c_char) -> *mut c_char {
    reset_error();

    match read_str(json) {
        Some(payload) => into_c_result(analyze_drawing(payload.to_string())),
        None => {
            record_error("Invalid JSON string pointer");
            ptr::null_mut()
        }
    }
}

/// Opaque analyzer owned by the caller
pub struct HtpAnalyzerHandle {
    analyzer: DrawingAnalyzer,
}

/// Build an analyzer from optional configuration JSON.
///
/// # Safety
/// `config_json` must be NULL (default ceilings) or point to a
/// null-terminated string. Release the handle with `htp_analyzer_free`.
/// NULL signals an error.
#[no_mangle]
pub unsafe extern "C" fn htp_analyzer_new(config_json: *const c_char) -> *mut HtpAnalyzerHandle {
    reset_error();

    let config = if config_json.is_null() {
        Ok(AnalyzerConfig::default())
    } else {
        match read_str(config_json) {
            Some(text) => AnalyzerConfig::from_json(text),
            None => Err(AnalysisError::ConfigError(
                "configuration is not valid UTF-8".to_string(),
            )),
        }
    };

    match config.and_then(DrawingAnalyzer::with_config) {
        Ok(analyzer) => Box::into_raw(Box::new(HtpAnalyzerHandle { analyzer })),
        Err(e) => {
            record_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Release an analyzer.
///
/// # Safety
/// `analyzer` must be NULL or a handle from `htp_analyzer_new` that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn htp_analyzer_free(analyzer: *mut HtpAnalyzerHandle) {
    if !analyzer.is_null() {
        drop(Box::from_raw(analyzer));
    }
}

/// Analyze a submission with a configured analyzer.
///
/// # Safety
/// `analyzer` must be a live handle from `htp_analyzer_new`; `json` must be
/// NULL or point to a null-terminated string. The result is owned by the
/// caller (`htp_free_string`); NULL signals an error.
#[no_mangle]
pub unsafe extern "C" fn htp_analyzer_analyze(
    analyzer: *const HtpAnalyzerHandle,
    json: *const c_char,
) -> *mut c_char {
    reset_error();

    let Some(handle) = analyzer.as_ref() else {
        record_error("Null analyzer pointer");
        return ptr::null_mut();
    };

    match read_str(json) {
        Some(payload) => into_c_result(handle.analyzer.analyze_json(payload)),
        None => {
            record_error("Invalid JSON string pointer");
            ptr::null_mut()
        }
    }
}

/// Release a string returned by this library.
///
/// # Safety
/// `ptr` must be NULL or a string returned by an `htp_*` function that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn htp_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Message for the most recent failure on this thread, or NULL.
///
/// # Safety
/// The pointer is borrowed: do not free it, and do not use it after the next
/// `htp_*` call on this thread.
#[no_mangle]
pub unsafe extern "C" fn htp_last_error() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(ptr::null(), |message| message.as_ptr())
    })
}

/// Library version as a static string.
///
/// # Safety
/// The pointer refers to static memory; do not free it.
#[no_mangle]
pub unsafe extern "C" fn htp_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
