//! C-ABI wrapper around `pokedex-core`.
//!
//! # Overview
//! Exposes the PokeAPI request builders and response parsers through
//! `extern "C"` functions so the iOS and Android shells can drive the list,
//! search and detail flows with their own HTTP stacks. The host fans out the
//! per-entry requests of a list page itself and keeps results by index.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiPokedexResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `pokedex_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use pokedex_core::{colors, ClientConfig, HttpResponse, PokedexClient};

use types::*;

/// Borrow a C string as `&str`. Null or invalid UTF-8 yields `None`.
fn borrow_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `PokedexClient` bound to `base_url`
/// (e.g. `https://pokeapi.co/api/v2`).
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `pokedex_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_client_new(base_url: *const c_char) -> *mut FfiPokedexClient {
    catch_unwind(|| {
        let Some(url) = borrow_str(base_url) else {
            return std::ptr::null_mut();
        };
        let client = PokedexClient::new(url);
        Box::into_raw(Box::new(FfiPokedexClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create a client from a JSON configuration document. Omitted keys take
/// their defaults; a null pointer means "all defaults".
///
/// Returns null if the document does not parse.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_client_new_from_config(config_json: *const c_char) -> *mut FfiPokedexClient {
    catch_unwind(|| {
        let config = if config_json.is_null() {
            ClientConfig::default()
        } else {
            match borrow_str(config_json).map(ClientConfig::from_json) {
                Some(Ok(config)) => config,
                _ => return std::ptr::null_mut(),
            }
        };
        let client = PokedexClient::from_config(&config);
        Box::into_raw(Box::new(FfiPokedexClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `pokedex_client_new*`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_client_free(client: *mut FfiPokedexClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the request for the first `limit` entries of the index.
///
/// Returns null if `client` is null or `limit` is zero.
/// The caller must free the returned pointer with `pokedex_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_build_list_page(
    client: *const FfiPokedexClient,
    limit: u32,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.inner.build_list_page(limit) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the request for a single creature by canonical name or id.
///
/// Returns null if `client` or `name` is null, or if `name` cannot name an
/// entry (empty, `.` or `..`). Hosts treat the latter as "no such entry".
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_build_get_pokemon(
    client: *const FfiPokedexClient,
    name: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let Some(name) = borrow_str(name) else {
            return std::ptr::null_mut();
        };
        let client = unsafe { &*client };
        match client.inner.build_get_pokemon(name) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the request for a list-page entry's `url`.
///
/// Returns null if `client` or `url` is null.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_build_get_by_reference(
    client: *const FfiPokedexClient,
    url: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let Some(url) = borrow_str(url) else {
            return std::ptr::null_mut();
        };
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_get_by_reference(url))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body: borrow_str(resp.body).unwrap_or("").to_string(),
    }
}

/// Shared null checks and conversion for every `pokedex_parse_*` function.
fn with_response(
    client: *const FfiPokedexClient,
    response: *const FfiHttpResponse,
    parse: impl FnOnce(&PokedexClient, HttpResponse) -> *mut FfiPokedexResult,
) -> *mut FfiPokedexResult {
    if client.is_null() {
        return FfiPokedexResult::null_arg("client");
    }
    if response.is_null() {
        return FfiPokedexResult::null_arg("response");
    }
    let client = unsafe { &*client };
    let resp = unsafe { &*response };
    parse(&client.inner, ffi_response_to_core(resp))
}

/// Parse a list-page response.
///
/// Returns a result with `data_tag = ResourceList` on success. The host
/// builds one `pokedex_build_get_by_reference` request per entry.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_parse_list_page(
    client: *const FfiPokedexClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPokedexResult {
    catch_unwind(|| {
        with_response(client, response, |c, r| match c.parse_list_page(r) {
            Ok(entries) => FfiPokedexResult::ok_resource_list(entries),
            Err(e) => FfiPokedexResult::from_error(e),
        })
    })
    .unwrap_or_else(|_| FfiPokedexResult::panic("panic in pokedex_parse_list_page"))
}

/// Parse the response to a by-reference request of a list page.
///
/// Returns a result with `data_tag = Summary` on success.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_parse_summary(
    client: *const FfiPokedexClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPokedexResult {
    catch_unwind(|| {
        with_response(client, response, |c, r| match c.parse_summary(r) {
            Ok(summary) => FfiPokedexResult::ok_summary(summary),
            Err(e) => FfiPokedexResult::from_error(e),
        })
    })
    .unwrap_or_else(|_| FfiPokedexResult::panic("panic in pokedex_parse_summary"))
}

/// Parse a search response.
///
/// Returns `data_tag = SummaryList` with zero (404) or one entry.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_parse_search(
    client: *const FfiPokedexClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPokedexResult {
    catch_unwind(|| {
        with_response(client, response, |c, r| match c.parse_search(r) {
            Ok(found) => FfiPokedexResult::ok_summary_list(found),
            Err(e) => FfiPokedexResult::from_error(e),
        })
    })
    .unwrap_or_else(|_| FfiPokedexResult::panic("panic in pokedex_parse_search"))
}

/// Parse a detail response.
///
/// Returns a result with `data_tag = Detail` on success.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_parse_detail(
    client: *const FfiPokedexClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPokedexResult {
    catch_unwind(|| {
        with_response(client, response, |c, r| match c.parse_detail(r) {
            Ok(detail) => FfiPokedexResult::ok_detail(detail),
            Err(e) => FfiPokedexResult::from_error(e),
        })
    })
    .unwrap_or_else(|_| FfiPokedexResult::panic("panic in pokedex_parse_detail"))
}

// ---------------------------------------------------------------------------
// Helpers for the shell
// ---------------------------------------------------------------------------

/// Normalize search-box input (trim, lowercase).
///
/// Returns null when the input is null or blank, meaning "reload the list".
/// Free a non-null result with `pokedex_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_normalize_search(term: *const c_char) -> *mut c_char {
    catch_unwind(|| {
        borrow_str(term)
            .and_then(pokedex_core::normalize_query)
            .map_or(std::ptr::null_mut(), |key| into_c_string(key))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// `#RRGGBB` color for a type label; unknown or null labels get the
/// fallback color. Free the result with `pokedex_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_type_color(label: *const c_char) -> *mut c_char {
    catch_unwind(|| {
        let color = borrow_str(label).map_or(colors::FALLBACK_COLOR, colors::type_color);
        into_c_string(color)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `pokedex_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| unsafe { FfiHttpRequest::free(req) });
}

/// Free an `FfiPokedexResult` returned by any `pokedex_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_free_result(result: *mut FfiPokedexResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| unsafe { FfiPokedexResult::free(result) });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn pokedex_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| unsafe { free_c_string(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
