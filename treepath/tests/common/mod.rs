//! Common test utilities for integration tests.
//!
//! This module provides the layout trees shared by the integration tests.

use treepath::{Error, Node, Params, PathSegment};

/// The HLS package layout used throughout the tests.
///
/// ```text
/// videos/{videoId}/
///   master.m3u8                      manifest
///   stream_{quality}/                variantStream
///     playlist.m3u8                  variantStream.playlist
///     segment_{segmentIndex + 1}.ts  variantStream.segment
/// ```
#[allow(dead_code)]
pub fn hls_tree() -> Node {
    let segment = PathSegment::dynamic(["segmentIndex"], |params: &Params| {
        let value = params.require("segmentIndex")?;
        let index = value
            .as_i64()
            .or_else(|| value.to_string().parse().ok())
            .ok_or_else(|| Error::Validation {
                field: "segmentIndex".into(),
                message: format!("not an integer: {value}"),
            })?;
        Ok(format!("segment_{}.ts", index + 1))
    })
    .unwrap();

    Node::dir(
        PathSegment::template("videos/{videoId}").unwrap(),
        [
            ("manifest", Node::file("master.m3u8").unwrap()),
            (
                "variantStream",
                Node::dir(
                    PathSegment::template("stream_{quality}").unwrap(),
                    [
                        ("playlist", Node::file("playlist.m3u8").unwrap()),
                        ("segment", Node::file(segment).unwrap()),
                    ],
                )
                .unwrap(),
            ),
        ],
    )
    .unwrap()
}

/// A tree with no parameters at all.
///
/// ```text
/// d0/
///   f1          file1
///   d1/         dir1
///     f2        dir1.file2
/// ```
#[allow(dead_code)]
pub fn static_tree() -> Node {
    Node::dir(
        "d0",
        [
            ("file1", Node::file("f1").unwrap()),
            (
                "dir1",
                Node::dir("d1", [("file2", Node::file("f2").unwrap())]).unwrap(),
            ),
        ],
    )
    .unwrap()
}

/// Parameters locating one video.
#[allow(dead_code)]
pub fn video(id: i64) -> Params {
    Params::new().with("videoId", id)
}

/// Parameters locating one variant stream of a video.
#[allow(dead_code)]
pub fn stream(id: i64, quality: i64) -> Params {
    video(id).with("quality", quality)
}

/// Parameters locating one media segment.
#[allow(dead_code)]
pub fn segment(id: i64, quality: i64, index: i64) -> Params {
    stream(id, quality).with("segmentIndex", index)
}

/// The HLS layout as YAML, with the segment as a plain template.
#[allow(dead_code)]
pub const HLS_YAML: &str = r#"
mode: url
root:
  path: "videos/{videoId}"
  children:
    manifest: { path: master.m3u8 }
    variantStream:
      path: "stream_{quality}"
      children:
        playlist: { path: playlist.m3u8 }
        segment: { path: "segment_{segmentIndex}.ts" }
"#;
