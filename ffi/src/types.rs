//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, pointer + length instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface. Arrays are handed
//! out as leaked boxed slices so that length and capacity always agree when
//! they are reclaimed.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use pokedex_core::error::ApiError;
use pokedex_core::http::HttpMethod;
use pokedex_core::{DetailRecord, NamedResource, SummaryRecord};

/// Opaque handle to a `PokedexClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiPokedexClient {
    pub(crate) inner: pokedex_core::PokedexClient,
}

// ---------------------------------------------------------------------------
// Allocation helpers
// ---------------------------------------------------------------------------

/// Move a Rust string into a C string. Interior NULs are dropped.
pub(crate) fn into_c_string(s: impl Into<String>) -> *mut c_char {
    let s: String = s.into();
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

/// Reclaim a string from `into_c_string`. Null is ignored.
pub(crate) unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Leak a vector as a pointer + length pair. Empty vectors become null.
pub(crate) fn leak_slice<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let len = items.len() as u32;
    let ptr = Box::into_raw(items.into_boxed_slice()) as *mut T;
    (ptr, len)
}

/// Reclaim a pair produced by `leak_slice`.
pub(crate) unsafe fn reclaim_slice<T>(ptr: *mut T, len: u32) -> Vec<T> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    let slice = std::ptr::slice_from_raw_parts_mut(ptr, len as usize);
    unsafe { Box::from_raw(slice) }.into_vec()
}

fn leak_strings(items: Vec<String>) -> (*mut *mut c_char, u32) {
    leak_slice(items.into_iter().map(into_c_string).collect())
}

unsafe fn free_strings(ptr: *mut *mut c_char, len: u32) {
    for s in unsafe { reclaim_slice(ptr, len) } {
        unsafe { free_c_string(s) };
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `pokedex_build_*` functions. The C caller executes the request
/// and passes the response back through `pokedex_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: pokedex_core::HttpRequest) -> *mut Self {
        let headers = req
            .headers
            .into_iter()
            .map(|(k, v)| FfiHeader {
                key: into_c_string(k),
                value: into_c_string(v),
            })
            .collect();
        let (headers, headers_len) = leak_slice(headers);

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: into_c_string(req.url),
            headers,
            headers_len,
        }))
    }

    /// Release everything `from_core` allocated.
    pub(crate) unsafe fn free(ptr: *mut Self) {
        let req = unsafe { Box::from_raw(ptr) };
        unsafe { free_c_string(req.url) };
        for h in unsafe { reclaim_slice(req.headers, req.headers_len) } {
            unsafe {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `pokedex_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result payloads
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiPokedexResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Transport = 3,
    Deserialization = 4,
    InvalidPageSize = 5,
    InvalidConfig = 6,
    Panic = 7,
    NullArg = 8,
}

/// Tag that tells `pokedex_free_result` what `FfiPokedexResult::data` points to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    ResourceList = 1,
    Summary = 2,
    SummaryList = 3,
    Detail = 4,
}

/// A list-page entry: name plus the reference to fetch next.
#[repr(C)]
pub struct FfiNamedResource {
    pub name: *mut c_char,
    pub url: *mut c_char,
}

#[repr(C)]
pub struct FfiResourceList {
    pub items: *mut FfiNamedResource,
    pub len: u32,
}

/// A list-screen card. `color` is the primary type's theme color.
#[repr(C)]
pub struct FfiSummary {
    pub name: *mut c_char,
    pub image: *mut c_char,
    pub image_back: *mut c_char,
    pub types: *mut *mut c_char,
    pub types_len: u32,
    pub color: *mut c_char,
}

#[repr(C)]
pub struct FfiSummaryList {
    pub items: *mut FfiSummary,
    pub len: u32,
}

#[repr(C)]
pub struct FfiStat {
    pub name: *mut c_char,
    pub base_value: u32,
}

/// The detail-screen record.
#[repr(C)]
pub struct FfiDetail {
    pub name: *mut c_char,
    pub image: *mut c_char,
    pub image_back: *mut c_char,
    pub types: *mut *mut c_char,
    pub types_len: u32,
    pub stats: *mut FfiStat,
    pub stats_len: u32,
    pub color: *mut c_char,
}

impl FfiNamedResource {
    fn from_core(entry: NamedResource) -> Self {
        Self {
            name: into_c_string(entry.name),
            url: into_c_string(entry.url),
        }
    }

    unsafe fn free_fields(&self) {
        unsafe {
            free_c_string(self.name);
            free_c_string(self.url);
        }
    }
}

impl FfiSummary {
    fn from_core(summary: SummaryRecord) -> Self {
        let color = into_c_string(summary.theme_color());
        let (types, types_len) = leak_strings(summary.types);
        Self {
            name: into_c_string(summary.name),
            image: into_c_string(summary.image),
            image_back: into_c_string(summary.image_back),
            types,
            types_len,
            color,
        }
    }

    unsafe fn free_fields(&self) {
        unsafe {
            free_c_string(self.name);
            free_c_string(self.image);
            free_c_string(self.image_back);
            free_strings(self.types, self.types_len);
            free_c_string(self.color);
        }
    }
}

impl FfiDetail {
    fn from_core(detail: DetailRecord) -> Self {
        let color = into_c_string(detail.theme_color());
        let stats = detail
            .stats
            .into_iter()
            .map(|s| FfiStat {
                name: into_c_string(s.name),
                base_value: s.base_value,
            })
            .collect();
        let (stats, stats_len) = leak_slice(stats);
        let (types, types_len) = leak_strings(detail.types);
        Self {
            name: into_c_string(detail.name),
            image: into_c_string(detail.image),
            image_back: into_c_string(detail.image_back),
            types,
            types_len,
            stats,
            stats_len,
            color,
        }
    }

    unsafe fn free_fields(&self) {
        unsafe {
            free_c_string(self.name);
            free_c_string(self.image);
            free_c_string(self.image_back);
            free_strings(self.types, self.types_len);
            for stat in reclaim_slice(self.stats, self.stats_len) {
                free_c_string(stat.name);
            }
            free_c_string(self.color);
        }
    }
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiPokedexResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

impl FfiPokedexResult {
    fn ok(data_tag: FfiDataTag, data: *mut c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiPokedexResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiPokedexResult {
            error_code,
            error_message: into_c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build a success result carrying the entries of a list page.
    pub(crate) fn ok_resource_list(entries: Vec<NamedResource>) -> *mut Self {
        let items = entries.into_iter().map(FfiNamedResource::from_core).collect();
        let (items, len) = leak_slice(items);
        let list = Box::new(FfiResourceList { items, len });
        Self::ok(FfiDataTag::ResourceList, Box::into_raw(list) as *mut c_void)
    }

    pub(crate) fn ok_summary(summary: SummaryRecord) -> *mut Self {
        let summary = Box::new(FfiSummary::from_core(summary));
        Self::ok(FfiDataTag::Summary, Box::into_raw(summary) as *mut c_void)
    }

    /// Build a success result carrying zero or more summaries.
    pub(crate) fn ok_summary_list(summaries: Vec<SummaryRecord>) -> *mut Self {
        let items = summaries.into_iter().map(FfiSummary::from_core).collect();
        let (items, len) = leak_slice(items);
        let list = Box::new(FfiSummaryList { items, len });
        Self::ok(FfiDataTag::SummaryList, Box::into_raw(list) as *mut c_void)
    }

    pub(crate) fn ok_detail(detail: DetailRecord) -> *mut Self {
        let detail = Box::new(FfiDetail::from_core(detail));
        Self::ok(FfiDataTag::Detail, Box::into_raw(detail) as *mut c_void)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let code = match &err {
            ApiError::NotFound => FfiErrorCode::NotFound,
            ApiError::Http { .. } => FfiErrorCode::Http,
            ApiError::Transport(_) => FfiErrorCode::Transport,
            ApiError::Deserialization(_) => FfiErrorCode::Deserialization,
            ApiError::InvalidPageSize => FfiErrorCode::InvalidPageSize,
            ApiError::InvalidConfig(_) => FfiErrorCode::InvalidConfig,
        };
        Self::err(code, err.status().unwrap_or(0), err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg.to_string())
    }

    /// Release the envelope and whatever `data_tag` says `data` holds.
    pub(crate) unsafe fn free(ptr: *mut Self) {
        let result = unsafe { Box::from_raw(ptr) };
        unsafe { free_c_string(result.error_message) };
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::ResourceList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiResourceList) };
                for item in unsafe { reclaim_slice(list.items, list.len) } {
                    unsafe { item.free_fields() };
                }
            }
            FfiDataTag::Summary => {
                let summary = unsafe { Box::from_raw(result.data as *mut FfiSummary) };
                unsafe { summary.free_fields() };
            }
            FfiDataTag::SummaryList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiSummaryList) };
                for item in unsafe { reclaim_slice(list.items, list.len) } {
                    unsafe { item.free_fields() };
                }
            }
            FfiDataTag::Detail => {
                let detail = unsafe { Box::from_raw(result.data as *mut FfiDetail) };
                unsafe { detail.free_fields() };
            }
            FfiDataTag::None => {}
        }
    }
}
