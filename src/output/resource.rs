//! Windows resource script generator

use std::path::Path;

use tracing::info;

use crate::config::ResourceMetadata;
use crate::version::VersionRecord;

/// Render the `.rc` document for `record`.
///
/// Lines are always terminated with CRLF, whatever the host platform.
pub fn render_resource_script(record: &VersionRecord, metadata: &ResourceMetadata) -> String {
    let file_version = record.file_version();
    let script = format!(
        r#"LANGUAGE LANG_NEUTRAL, SUBLANG_NEUTRAL

1 ICON "{icon}"

1 VERSIONINFO
FILEVERSION {file_version}
PRODUCTVERSION {file_version}
FILEOS 0x40004
FILETYPE 0x1
{{
BLOCK "StringFileInfo"
{{
	BLOCK "040904b0"
	{{
		VALUE "FileDescription", "{file_description}"
		VALUE "FileVersion", "{textual}"
		VALUE "CompanyName", "{company_name}"
		VALUE "LegalCopyright", "{legal_copyright}"
		VALUE "ProductName", "{codename}"
		VALUE "ProductVersion", "{textual}"
		VALUE "InternalName", "{internal_name}"
		VALUE "OriginalFilename", "{original_filename}"
	}}
}}

BLOCK "VarFileInfo"
{{
	VALUE "Translation", 0x0000 0x04E4
}}
}}

1 Manifest "{manifest}"
"#,
        icon = metadata.icon,
        file_version = file_version,
        file_description = metadata.file_description,
        textual = record.textual(),
        company_name = metadata.company_name,
        legal_copyright = metadata.legal_copyright,
        codename = record.codename(),
        internal_name = metadata.internal_name,
        original_filename = metadata.original_filename,
        manifest = metadata.manifest,
    );

    to_crlf(&script)
}

/// Render and write the resource script to `path` as UTF-8.
pub fn write_resource_script(
    path: &Path,
    record: &VersionRecord,
    metadata: &ResourceMetadata,
) -> std::io::Result<()> {
    let script = render_resource_script(record, metadata);
    std::fs::write(path, script)?;
    info!("Wrote resource script {:?} for version {}", path, record.textual());
    Ok(())
}

fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
