#[cfg(test)]
mod tests {

    mod logical_name_tests {
        use crate::services::matcher::{strip_collision_suffix, LogicalName};

        #[test]
        fn test_parse_plain_filename() {
            let name = LogicalName::parse("hero.jpg").unwrap();
            assert_eq!(name.base, "hero");
            assert_eq!(name.extension, "jpg");
        }

        #[test]
        fn test_parse_strips_collision_suffix() {
            let name = LogicalName::parse("hero-12.jpg").unwrap();
            assert_eq!(name.base, "hero");
            assert_eq!(name.extension, "jpg");
        }

        #[test]
        fn test_parse_strips_directory_component() {
            let name = LogicalName::parse("uploads/2024/hero-3.png").unwrap();
            assert_eq!(name.base, "hero");
            assert_eq!(name.extension, "png");
        }

        #[test]
        fn test_parse_keeps_non_numeric_dash_segments() {
            let name = LogicalName::parse("hero-interior.jpg").unwrap();
            assert_eq!(name.base, "hero-interior");
        }

        #[test]
        fn test_parse_strips_only_trailing_numeric_segment() {
            let name = LogicalName::parse("hero-interior-2.jpg").unwrap();
            assert_eq!(name.base, "hero-interior");
        }

        #[test]
        fn test_parse_no_extension() {
            assert!(LogicalName::parse("hero").is_none());
            assert!(LogicalName::parse("").is_none());
            assert!(LogicalName::parse(".gitignore").is_none());
        }

        #[test]
        fn test_strip_collision_suffix() {
            assert_eq!(strip_collision_suffix("hero-7"), "hero");
            assert_eq!(strip_collision_suffix("hero-007"), "hero");
            assert_eq!(strip_collision_suffix("hero"), "hero");
            assert_eq!(strip_collision_suffix("hero-7a"), "hero-7a");
            assert_eq!(strip_collision_suffix("-7"), "-7");
        }
    }

    mod url_tests {
        use crate::services::urls::{classify, normalize, normalize_ref, AssetRef, RawAssetRef};

        const ORIGIN: &str = "https://example.com";
        const MEDIA_PATH: &str = "/media/file";

        #[test]
        fn test_classify_empty() {
            assert_eq!(classify("", MEDIA_PATH), AssetRef::Empty);
            assert_eq!(classify("   ", MEDIA_PATH), AssetRef::Empty);
        }

        #[test]
        fn test_classify_absolute() {
            assert!(matches!(
                classify("https://cdn.example.net/a.png", MEDIA_PATH),
                AssetRef::Absolute(_)
            ));
        }

        #[test]
        fn test_classify_canonical_relative() {
            assert_eq!(
                classify("/media/file/a.png", MEDIA_PATH),
                AssetRef::CanonicalRelative("/media/file/a.png".to_string())
            );
        }

        #[test]
        fn test_classify_canonical_requires_full_segment() {
            // "/media/filex.png" is not under "/media/file/"
            assert!(matches!(
                classify("/media/filex.png", MEDIA_PATH),
                AssetRef::BareFilename(_)
            ));
        }

        #[test]
        fn test_classify_bare_filename() {
            assert_eq!(
                classify("logo.png", MEDIA_PATH),
                AssetRef::BareFilename("logo.png".to_string())
            );
            assert_eq!(
                classify("old/path/logo.png", MEDIA_PATH),
                AssetRef::BareFilename("logo.png".to_string())
            );
        }

        #[test]
        fn test_normalize_same_origin_passthrough() {
            let reference = "https://example.com/media/file/logo.png";
            assert_eq!(normalize(reference, ORIGIN, MEDIA_PATH), reference);
        }

        #[test]
        fn test_normalize_foreign_host_rebuilds_from_filename() {
            assert_eq!(
                normalize("https://old-host/cdn/x/logo.png", ORIGIN, MEDIA_PATH),
                "https://example.com/media/file/logo.png"
            );
        }

        #[test]
        fn test_normalize_foreign_host_keeps_canonical_path() {
            assert_eq!(
                normalize("https://old-host/media/file/logo.png", ORIGIN, MEDIA_PATH),
                "https://example.com/media/file/logo.png"
            );
        }

        #[test]
        fn test_normalize_bare_filename() {
            assert_eq!(
                normalize("logo.png", ORIGIN, MEDIA_PATH),
                "/media/file/logo.png"
            );
        }

        #[test]
        fn test_normalize_relative_path() {
            assert_eq!(
                normalize("uploads/logo.png", ORIGIN, MEDIA_PATH),
                "/media/file/logo.png"
            );
        }

        #[test]
        fn test_normalize_empty() {
            assert_eq!(normalize("", ORIGIN, MEDIA_PATH), "");
            assert_eq!(normalize_ref(None, ORIGIN, MEDIA_PATH), "");
        }

        #[test]
        fn test_normalize_idempotent() {
            let inputs = [
                "",
                "logo.png",
                "uploads/logo.png",
                "/media/file/logo.png",
                "https://example.com/media/file/logo.png",
                "https://old-host/cdn/x/logo.png",
                "https://old-host/media/file/logo.png",
            ];
            for input in inputs {
                let once = normalize(input, ORIGIN, MEDIA_PATH);
                let twice = normalize(&once, ORIGIN, MEDIA_PATH);
                assert_eq!(once, twice, "normalize not idempotent for '{}'", input);
            }
        }

        #[test]
        fn test_raw_ref_object_url_wins() {
            let r = RawAssetRef::Object {
                url: Some("https://old-host/a/logo.png".to_string()),
                filename: Some("other.png".to_string()),
            };
            assert_eq!(
                normalize_ref(Some(&r), ORIGIN, MEDIA_PATH),
                "https://example.com/media/file/logo.png"
            );
        }

        #[test]
        fn test_raw_ref_object_filename_fallback() {
            let r = RawAssetRef::Object {
                url: None,
                filename: Some("logo.png".to_string()),
            };
            assert_eq!(
                normalize_ref(Some(&r), ORIGIN, MEDIA_PATH),
                "/media/file/logo.png"
            );
        }

        #[test]
        fn test_raw_ref_deserializes_loose_shapes() {
            let text: RawAssetRef = serde_json::from_str(r#""logo.png""#).unwrap();
            assert_eq!(text.as_reference(), "logo.png");

            let object: RawAssetRef =
                serde_json::from_str(r#"{"url": "/media/file/a.png", "filename": "a.png"}"#)
                    .unwrap();
            assert_eq!(object.as_reference(), "/media/file/a.png");

            let empty: RawAssetRef = serde_json::from_str(r#"{}"#).unwrap();
            assert_eq!(empty.as_reference(), "");
        }
    }

    mod storage_tests {
        use crate::config::StorageConfig;
        use crate::services::storage::StorageResolver;

        #[test]
        fn test_configured_root_wins_when_present() {
            let dir = std::env::temp_dir().join("waypost_storage_test_root");
            std::fs::create_dir_all(&dir).unwrap();

            let config = StorageConfig {
                root: Some(dir.to_string_lossy().into_owned()),
            };
            let resolver = StorageResolver::locate(&config);
            assert_eq!(resolver.root(), dir.as_path());

            std::fs::remove_dir_all(&dir).ok();
        }

        #[test]
        fn test_missing_candidates_fall_back_to_default() {
            let config = StorageConfig {
                root: Some("/nonexistent/waypost/storage".to_string()),
            };
            let resolver = StorageResolver::locate(&config);
            // Default is the working-directory "media" candidate, which is
            // always in the probed list.
            assert!(resolver.candidate_list().contains(&resolver.root().to_path_buf()));
            assert!(resolver.root().ends_with("media"));
        }

        #[test]
        fn test_candidate_order() {
            let config = StorageConfig {
                root: Some("/explicit/root".to_string()),
            };
            let resolver = StorageResolver::locate(&config);
            let candidates = resolver.candidate_list();
            assert_eq!(candidates[0], std::path::PathBuf::from("/explicit/root"));
            assert_eq!(
                candidates[1],
                std::path::PathBuf::from(crate::services::storage::CONTAINER_MEDIA_DIR)
            );
        }

        #[test]
        fn test_path_for_joins_root() {
            let config = StorageConfig {
                root: Some("/explicit/root".to_string()),
            };
            let resolver = StorageResolver::locate(&config);
            assert_eq!(
                resolver.path_for("a.png"),
                resolver.root().join("a.png")
            );
        }
    }

    mod config_tests {
        use crate::Config;
        use std::path::Path;

        fn write_config(name: &str, content: &str) -> std::path::PathBuf {
            let path = std::env::temp_dir().join(name);
            std::fs::write(&path, content).unwrap();
            path
        }

        const VALID: &str = r#"
[site]
origin = "https://example.com"

[database]
path = "data/waypost.db"
"#;

        #[test]
        fn test_config_load_missing_file() {
            let result = Config::load(Path::new("/nonexistent/waypost.toml"));
            assert!(result.is_err());
        }

        #[test]
        fn test_config_load_valid_toml_with_defaults() {
            let path = write_config("waypost_test_valid.toml", VALID);
            let config = Config::load(&path).unwrap();
            assert_eq!(config.site.origin, "https://example.com");
            assert_eq!(config.site.media_path, "/media/file");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.repository.search_page_size, 200);
            assert!(config.storage.root.is_none());
            std::fs::remove_file(&path).ok();
        }

        #[test]
        fn test_config_rejects_trailing_slash_origin() {
            let path = write_config(
                "waypost_test_slash.toml",
                r#"
[site]
origin = "https://example.com/"

[database]
path = "data/waypost.db"
"#,
            );
            assert!(Config::load(&path).is_err());
            std::fs::remove_file(&path).ok();
        }

        #[test]
        fn test_config_rejects_relative_origin() {
            let path = write_config(
                "waypost_test_relative.toml",
                r#"
[site]
origin = "example.com"

[database]
path = "data/waypost.db"
"#,
            );
            assert!(Config::load(&path).is_err());
            std::fs::remove_file(&path).ok();
        }

        #[test]
        fn test_config_rejects_zero_page_size() {
            let path = write_config(
                "waypost_test_pagesize.toml",
                r#"
[site]
origin = "https://example.com"

[database]
path = "data/waypost.db"

[repository]
search_page_size = 0
"#,
            );
            assert!(Config::load(&path).is_err());
            std::fs::remove_file(&path).ok();
        }
    }

    mod content_type_tests {
        use crate::models::Media;
        use crate::web::handlers::media::content_type_for;

        fn record(filename: &str, mime_type: &str) -> Media {
            Media {
                id: 1,
                filename: filename.to_string(),
                mime_type: mime_type.to_string(),
                alt_text: String::new(),
                size_variants: serde_json::json!({}),
                created_at: "2024-01-01 00:00:00".to_string(),
            }
        }

        #[test]
        fn test_extension_table_wins() {
            // Stored mime type disagrees; the extension decides.
            assert_eq!(
                content_type_for(&record("a.png", "image/jpeg")),
                "image/png"
            );
        }

        #[test]
        fn test_stored_mime_when_extension_unknown() {
            assert_eq!(
                content_type_for(&record("a.zzz9", "image/webp")),
                "image/webp"
            );
        }

        #[test]
        fn test_generic_binary_fallback() {
            assert_eq!(
                content_type_for(&record("a.zzz9", "")),
                "application/octet-stream"
            );
        }
    }
}
