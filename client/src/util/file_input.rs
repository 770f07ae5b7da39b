//! File picker glue for the document upload form.

/// Name of the first file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file_name(ev: &leptos::ev::Event) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        input.files()?.get(0).map(|file| file.name())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
