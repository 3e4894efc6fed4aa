//! 패턴을 독립 실행형 SVG 문서로 렌더링하는 모듈.

use std::f64::consts::PI;

use kurbo::{Affine, Vec2};
use svg::Document;
use svg::node::element::{Group, Path};
use thiserror::Error;
use tracing::debug;

use crate::domain::geometry::{EPSILON, condition_floats, format_general};
use crate::domain::params::SvgOutputParams;
use crate::domain::pattern::{Pattern, StrokedPath};

/// 헤더 숫자 유효숫자 자릿수.
const HEADER_DIGITS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("pattern has no horizontal extent (width {width}); nothing to scale")]
    DegeneratePattern { width: f64 },
}

/// 패턴 크기에서 파생되는 렌더링 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputContext {
    pub bounding_box_delta: Vec2,
    pub line_width: f64,
}

impl OutputContext {
    pub fn new(pattern: &Pattern, params: &SvgOutputParams) -> Self {
        let size = pattern.extents.size();
        let span = size.x + size.y;
        let delta = (span * 0.02).ceil();
        Self {
            bounding_box_delta: Vec2::new(delta, delta),
            line_width: (span * 0.001).ceil() * params.line_width,
        }
    }
}

/// 중심을 원점으로 옮기고, 확대하고, x축을 뒤집고, 회전한 뒤 이미지 중앙으로 옮긴다.
pub fn header_transform(pattern: &Pattern, size: Vec2, scale: f64, rotation: f64) -> Affine {
    let centre = pattern.extents.centre();
    Affine::translate(size * 0.5)
        * Affine::rotate(rotation)
        * Affine::scale_non_uniform(-1.0, 1.0)
        * Affine::scale(scale)
        * Affine::translate(-centre.to_vec2())
}

/// 테두리를 포함한 전체 SVG 문서를 만든다.
pub fn render_svg(pattern: &Pattern, params: &SvgOutputParams) -> Result<String, RenderError> {
    let pattern_size = pattern.extents.size();
    if pattern_size.x <= 0.0 {
        return Err(RenderError::DegeneratePattern {
            width: pattern_size.x,
        });
    }

    let context = OutputContext::new(pattern, params);
    let mut pattern = pattern.clone();
    for border in &params.borders {
        pattern.add_bounding_box(
            &border.color,
            context.bounding_box_delta * border.border_margin,
        );
    }

    let scale = params.width / pattern_size.x;
    let image = Vec2::new(params.width, scale * pattern_size.y)
        + Vec2::new(params.margin.width, params.margin.height) * 2.0;
    let transform = header_transform(&pattern, image, scale, PI);
    debug!(
        paths = pattern.paths.len(),
        scale,
        width = image.x,
        height = image.y,
        "rendering svg"
    );

    let mut group = Group::new().set("transform", matrix_attr(transform));
    for path in &pattern.paths {
        group = group.add(svg_path(path, params, &context));
    }
    let document = Document::new()
        .set("width", format_general(image.x, HEADER_DIGITS))
        .set("height", format_general(image.y, HEADER_DIGITS))
        .set("xmlns", SVG_NAMESPACE)
        .add(group);

    Ok(format!("{document}\n"))
}

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

fn matrix_attr(transform: Affine) -> String {
    let [a, b, c, d, e, f] = transform.as_coeffs();
    let [a, b, c, d] = condition_floats([a, b, c, d], EPSILON);
    let [e, f] = condition_floats([e, f], EPSILON);
    let matrix = [a, b, c, d, e, f]
        .iter()
        .map(|v| format_general(*v, HEADER_DIGITS))
        .collect::<Vec<_>>()
        .join(",");
    format!("matrix({matrix})")
}

fn svg_path(path: &StrokedPath, params: &SvgOutputParams, context: &OutputContext) -> Path {
    let color = match &path.color_override {
        Some(color) => color.as_str(),
        None if path.needle_on => params.oncolor.as_str(),
        None => params.offcolor.as_str(),
    };
    Path::new()
        .set("d", path.data.d())
        .set("stroke", color)
        .set("stroke-width", format_general(context.line_width, HEADER_DIGITS))
        .set("fill", "none")
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::domain::geometry::Extents;
    use crate::domain::path::PathData;

    fn sample_pattern() -> Pattern {
        let mut pattern = Pattern::new(Extents {
            min: Point::new(0.0, 0.0),
            max: Point::new(100.0, 50.0),
        });
        let mut on = PathData::new();
        on.line(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        pattern.push(StrokedPath {
            needle_on: true,
            data: on,
            color_override: None,
        });
        let mut off = PathData::new();
        off.line(Point::new(100.0, 50.0), Point::new(0.0, 50.0));
        pattern.push(StrokedPath {
            needle_on: false,
            data: off,
            color_override: None,
        });
        pattern
    }

    #[test]
    fn context_scales_with_pattern_size() {
        let params = SvgOutputParams {
            line_width: 2.0,
            ..SvgOutputParams::default()
        };
        let context = OutputContext::new(&sample_pattern(), &params);
        assert_eq!(context.bounding_box_delta, Vec2::new(3.0, 3.0));
        assert_eq!(context.line_width, 2.0);
    }

    /// `<tag ...>` 여는 태그 문자열들. 속성 순서에 의존하지 않고 검사하기 위해 쓴다.
    fn tags<'a>(svg: &'a str, name: &str) -> Vec<&'a str> {
        svg.split(&format!("<{name} "))
            .skip(1)
            .map(|rest| &rest[..rest.find('>').unwrap_or(rest.len())])
            .collect()
    }

    fn path_with<'a>(svg: &'a str, d: &str) -> (usize, &'a str) {
        tags(svg, "path")
            .into_iter()
            .enumerate()
            .find(|(_, tag)| tag.contains(&format!("d=\"{d}\"")))
            .unwrap()
    }

    #[test]
    fn header_flips_y_and_centres_pattern() {
        let svg = render_svg(&sample_pattern(), &SvgOutputParams::default()).unwrap();
        let root = tags(&svg, "svg")[0];
        assert!(root.contains("width=\"800\""));
        assert!(root.contains("height=\"450\""));
        assert!(root.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(tags(&svg, "g")[0].contains("transform=\"matrix(7,0,0,-7,50,400)\""));
        assert!(svg.contains("</g>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn paths_use_needle_colors_and_borders_come_last() {
        let svg = render_svg(&sample_pattern(), &SvgOutputParams::default()).unwrap();
        let (on, on_tag) = path_with(&svg, "M 0,0 L 100,50");
        assert!(on_tag.contains("stroke=\"black\""));
        assert!(on_tag.contains("stroke-width=\"1\""));
        assert!(on_tag.contains("fill=\"none\""));
        let (off, off_tag) = path_with(&svg, "M 100,50 L 0,50");
        assert!(off_tag.contains("stroke=\"red\""));
        let (border, border_tag) = path_with(&svg, "M -3,-3 L -3,53 L 103,53 L 103,-3 L -3,-3");
        assert!(border_tag.contains("stroke=\"blue\""));
        assert!(on < off && off < border);
    }

    #[test]
    fn border_margin_factor_scales_offset() {
        let params = SvgOutputParams::parse("|||||green:2,a\"b:0").unwrap();
        let svg = render_svg(&sample_pattern(), &params).unwrap();
        let (_, green) = path_with(&svg, "M -6,-6 L -6,56 L 106,56 L 106,-6 L -6,-6");
        assert!(green.contains("stroke=\"green\""));
        // 따옴표가 들어간 색 이름도 속성 값을 깨뜨리지 않아야 한다.
        assert!(!svg.contains("stroke=\"a\"b\""));
        assert!(svg.contains("stroke='a\"b'") || svg.contains("stroke=\"a&quot;b\""));
    }

    #[test]
    fn zero_width_pattern_is_rejected() {
        let pattern = Pattern::new(Extents {
            min: Point::new(0.0, 0.0),
            max: Point::new(0.0, 10.0),
        });
        assert_eq!(
            render_svg(&pattern, &SvgOutputParams::default()).unwrap_err(),
            RenderError::DegeneratePattern { width: 0.0 }
        );
    }
}
