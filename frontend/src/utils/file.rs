/// A file picked from an `<input type="file">`, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn read_selected_file(ev: &web_sys::Event) -> Result<Option<SelectedFile>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .ok_or("No file input")?;
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    Ok(Some(SelectedFile {
        name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    }))
}
