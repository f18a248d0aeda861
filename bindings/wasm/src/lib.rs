//! WebAssembly bindings for fastBoxblur.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use ::fastBoxblur::prelude::{Batch, BlurError, BlurResult, BoxBlur};

fn to_js_error(err: BlurError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn get_option(options: &Object, key: &str) -> Option<JsValue> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn parse_count(value: &JsValue, name: &str) -> Result<usize, JsValue> {
    match value.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 => Ok(v as usize),
        _ => Err(JsValue::from_str(&format!(
            "Option '{}' must be a non-negative integer",
            name
        ))),
    }
}

/// Blur an RGBA buffer in place.
///
/// `data` is typically `ImageData.data` from a 2D canvas context.
#[wasm_bindgen]
pub fn blur(data: &mut [u8], width: u32, height: u32, radius: u32) -> Result<(), JsValue> {
    ::fastBoxblur::blur(data, width as usize, height as usize, radius as usize)
        .map_err(to_js_error)
}

#[wasm_bindgen]
pub struct Diagnostics {
    pub rmse: f64,
    pub mae: f64,
    #[wasm_bindgen(js_name = maxChange)]
    pub max_change: u8,
    #[wasm_bindgen(js_name = changedPixels)]
    pub changed_pixels: u32,
}

#[wasm_bindgen]
pub struct BlurReportWasm {
    inner: BlurResult,
}

#[wasm_bindgen]
impl BlurReportWasm {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.dimensions.width as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.dimensions.height as u32
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> u32 {
        u32::try_from(self.inner.radius).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(getter, js_name = parallelUsed)]
    pub fn parallel_used(&self) -> bool {
        self.inner.parallel_used
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> Option<Diagnostics> {
        self.inner.diagnostics.as_ref().map(|d| Diagnostics {
            rmse: d.rmse,
            mae: d.mae,
            max_change: d.max_change,
            changed_pixels: d.changed_pixels as u32,
        })
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

/// Blur an RGBA buffer in place with an options object.
///
/// Recognised options: `radius`, `parallel`, `chunkRows`, `returnDiagnostics`.
#[wasm_bindgen(js_name = blurWithOptions)]
pub fn blur_with_options(
    data: &mut [u8],
    width: u32,
    height: u32,
    options: &JsValue,
) -> Result<BlurReportWasm, JsValue> {
    let mut builder = BoxBlur::new();

    if !options.is_undefined() && !options.is_null() {
        let options = Object::from(options.clone());

        if let Some(r) = get_option(&options, "radius") {
            builder = builder.radius(parse_count(&r, "radius")?);
        }
        if let Some(rd) = get_option(&options, "returnDiagnostics")
            && rd.as_bool().unwrap_or(false)
        {
            builder = builder.return_diagnostics();
        }
        if let Some(par) = get_option(&options, "parallel")
            && let Some(val) = par.as_bool()
        {
            builder = builder.parallel(val);
        }
        if let Some(cr) = get_option(&options, "chunkRows") {
            builder = builder.chunk_rows(parse_count(&cr, "chunkRows")?);
        }
    }

    let model = builder.adapter(Batch).build().map_err(to_js_error)?;

    let result = model
        .apply(data, width as usize, height as usize)
        .map_err(to_js_error)?;

    Ok(BlurReportWasm { inner: result })
}
