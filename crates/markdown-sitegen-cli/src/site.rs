//! Page generation around the conversion engine: templating, base-path
//! rewriting and the content/static directory walks.

use markdown_sitegen_engine::{ConvertError, extract_title, render};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
pub const MARKDOWN_EXTENSION: &str = "md";
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Content directory not found: {0}")]
    ContentDirNotFound(PathBuf),
    #[error("Static directory not found: {0}")]
    StaticDirNotFound(PathBuf),
    #[error("Invalid file in content directory (only .md files and folders allowed): {0}")]
    InvalidFile(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Ensures the base path has exactly one leading and one trailing `/`.
pub fn normalize_basepath(basepath: &str) -> String {
    let mut out = String::with_capacity(basepath.len() + 2);
    if !basepath.starts_with('/') {
        out.push('/');
    }
    out.push_str(basepath);
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Fills the template and points root-relative links at `basepath`.
///
/// Rewriting runs over the whole page, so links in the template and in the
/// converted content are both adjusted.
pub fn apply_template(template: &str, title: &str, content: &str, basepath: &str) -> String {
    let basepath = normalize_basepath(basepath);
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"))
}

/// Converts one markdown file into an HTML page.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from_path, &template, dest_path, basepath)
}

fn write_page(
    from_path: &Path,
    template: &str,
    dest_path: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from '{}' to '{}'",
        from_path.display(),
        dest_path.display()
    );

    let markdown = fs::read_to_string(from_path).map_err(io_error(from_path))?;
    let convert_error = |source| SiteError::Convert {
        path: from_path.to_path_buf(),
        source,
    };
    let title = extract_title(&markdown).map_err(convert_error)?;
    let content = render(&markdown).map_err(convert_error)?;

    let page = apply_template(template, &title, &content, basepath);

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest_path, page).map_err(io_error(dest_path))
}

/// Generates a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir`. Returns the number of pages written.
///
/// Entries are visited in sorted order; the first failure stops the walk.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<usize, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::ContentDirNotFound(content_dir.to_path_buf()));
    }
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    generate_dir(content_dir, &template, dest_dir, basepath)
}

fn generate_dir(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
    basepath: &str,
) -> Result<usize, SiteError> {
    fs::create_dir_all(dest_dir).map_err(io_error(dest_dir))?;

    let mut generated = 0;
    for path in sorted_entries(content_dir)? {
        if path.is_dir() {
            let name = path.file_name().unwrap_or_default();
            generated += generate_dir(&path, template, &dest_dir.join(name), basepath)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
        {
            let name = path.file_name().unwrap_or_default();
            let dest = dest_dir.join(name).with_extension(HTML_EXTENSION);
            write_page(&path, template, &dest, basepath)?;
            generated += 1;
        } else {
            return Err(SiteError::InvalidFile(path));
        }
    }
    Ok(generated)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut paths = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|e| e.path()).map_err(io_error(dir)))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

/// Replaces `output_dir` with a fresh copy of `static_dir`.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<(), SiteError> {
    if !static_dir.is_dir() {
        return Err(SiteError::StaticDirNotFound(static_dir.to_path_buf()));
    }
    if output_dir.exists() {
        log::debug!("Clearing '{}'", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(io_error(output_dir))?;
    }
    copy_dir_recursive(static_dir, output_dir)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(dst).map_err(io_error(dst))?;
    for path in sorted_entries(src)? {
        let target = dst.join(path.file_name().unwrap_or_default());
        if path.is_dir() {
            copy_dir_recursive(&path, &target)?;
        } else {
            log::debug!("Copying '{}' to '{}'", path.display(), target.display());
            fs::copy(&path, &target).map_err(io_error(&path))?;
        }
    }
    Ok(())
}
