pub fn last_path_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

pub fn normalize_list_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_of_file_path() {
        assert_eq!(last_path_segment("/sdcard/Download/report.pdf"), "report.pdf");
    }

    #[test]
    fn last_segment_ignores_trailing_slash() {
        assert_eq!(last_path_segment("/sdcard/Download/"), "Download");
    }

    #[test]
    fn last_segment_of_bare_name() {
        assert_eq!(last_path_segment("report.pdf"), "report.pdf");
    }

    #[test]
    fn normalize_appends_slash_once() {
        assert_eq!(normalize_list_path("/sdcard"), "/sdcard/");
        assert_eq!(normalize_list_path("/sdcard/"), "/sdcard/");
    }
}
