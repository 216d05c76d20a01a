use url::Url;

/// Returns the last non-empty path segment of a URL, ignoring query and fragment.
pub fn file_name_from_url(url: &Url) -> Option<&str> {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
}

/// Human-readable file size for log lines: `512 B`, `48.3 KiB`, `1.25 MiB`.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    }
}
