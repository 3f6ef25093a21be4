use super::*;
use crate::surface::contract::RenderSurface;

const MANIFEST: &str = r#"[
  { "src": "w/a.webp", "caption": "Dawn", "width": 800, "height": 400, "preview": "w/rs/a-800.webp" },
  { "src": "w/b.MP4" },
  { "src": "w/c.jpg", "caption": "   ", "type": "image", "width": 300, "height": 600 },
  { "src": "w/d.gif", "type": "video" }
]"#;

#[test]
fn parses_manifest_and_ignores_extra_fields() {
    let g = Gallery::from_json_str(MANIFEST).unwrap();
    assert_eq!(g.items.len(), 4);
    assert_eq!(g.items[0].caption_text(), Some("Dawn"));
    assert_eq!(g.items[2].caption_text(), None);
    assert_eq!(g.items[2].kind, Some(MediaKind::Image));
}

#[test]
fn video_detection_uses_type_or_extension() {
    let g = Gallery::from_json_str(MANIFEST).unwrap();
    let flags: Vec<bool> = g.items.iter().map(GalleryItem::is_video).collect();
    assert_eq!(flags, vec![false, true, false, true]);
}

#[test]
fn surface_heights_follow_aspect_and_caption() {
    let g = Gallery::from_json_str(MANIFEST).unwrap();
    let s = g
        .build_surface("#gallery", 400.0, &GalleryMetrics::default())
        .unwrap();
    let c = s.query_container("gallery").unwrap();
    let items = s.children(c).unwrap();
    let heights: Vec<f64> = items.iter().map(|&i| s.client_height(i).unwrap()).collect();
    // 400px wide blocks: 2:1 + caption, fallback square, 1:2, fallback square.
    assert_eq!(heights, vec![224.0, 400.0, 800.0, 400.0]);
    assert_eq!(s.key(items[1]), Some("w/b.MP4"));
}

#[test]
fn rejects_bad_entries() {
    assert!(Gallery::from_json_str(r#"[{ "src": "" }]"#).is_err());
    assert!(Gallery::from_json_str(r#"[{ "src": "a.png", "width": 0, "height": 3 }]"#).is_err());
    assert!(matches!(
        Gallery::from_json_str("{}").unwrap_err(),
        MasonryError::Serde(_)
    ));

    let metrics = GalleryMetrics {
        fallback_aspect: 0.0,
        ..GalleryMetrics::default()
    };
    assert!(
        Gallery::default()
            .build_surface("g", 10.0, &metrics)
            .is_err()
    );
}
