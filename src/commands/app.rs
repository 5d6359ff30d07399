use crate::editor::Editor;
use crate::error::{Error, Result};
use crate::file;
use tracing::info;

pub fn exit(editor: &mut Editor) {
    if editor.modified && !editor.quit_requested {
        editor.quit_requested = true;
        editor.status = Some(String::from("Unsaved changes; press Ctrl+Q again to quit"));
        return;
    }

    editor.running = false;
}

pub fn save(editor: &mut Editor) -> Result<()> {
    let path = editor.file_path.as_ref().ok_or(Error::NoFilePath)?;
    file::save(path, &editor.document).map_err(|source| Error::Save {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), lines = editor.document.line_count(), "saved");
    editor.modified = false;
    editor.status = Some(format!(
        "Wrote {} lines to {}",
        editor.document.line_count(),
        path.display()
    ));
    Ok(())
}
