use api::FileUpload;
use dioxus::prelude::*;
use ui::validation::mime_from_name;

/// Read the first file of a file-input change event into an upload. The MIME
/// type comes from the extension; the validators check it before anything is
/// sent.
pub(crate) async fn picked_file(evt: &FormEvent) -> Option<FileUpload> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;
    Some(FileUpload {
        mime: mime_from_name(&name).to_string(),
        file_name: name,
        bytes,
    })
}
