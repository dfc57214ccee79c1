//! # PNG 图像输出
//!
//! 使用 `plotters` 位图后端将场景绘制为 PNG：白底，原子为带黑色描边的实心圆，
//! 由远及近绘制实现遮挡。
//!
//! ## 依赖关系
//! - 被 `commands/figure.rs` 调用
//! - 使用 `render/scene.rs` 的 Scene
//! - 使用 `plotters` 渲染

use crate::error::{Result, SurfigError};
use crate::render::scene::Scene;

use plotters::prelude::*;
use std::path::Path;

/// 将场景写为 PNG 文件
pub fn render_png(scene: &Scene, output_path: &Path) -> Result<()> {
    let render_err = |reason: String| SurfigError::RenderError {
        path: output_path.display().to_string(),
        reason,
    };

    let root = BitMapBackend::new(output_path, (scene.width, scene.height)).into_drawing_area();
    draw_scene(&root, scene).map_err(render_err)?;
    root.present().map_err(|e| render_err(e.to_string()))?;
    Ok(())
}

/// 绘制场景的核心逻辑
fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scene: &Scene,
) -> std::result::Result<(), String>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

    // 晶胞线框先画，位于原子下方
    for (a, b) in &scene.cell_lines {
        root.draw(&PathElement::new(
            vec![to_px(*a), to_px(*b)],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| format!("{:?}", e))?;
    }

    for disc in &scene.discs {
        let center = to_px(disc.center);
        let radius = disc.radius.round().max(1.0) as i32;
        let (r, g, b) = disc.color;

        root.draw(&Circle::new(center, radius, RGBColor(r, g, b).filled()))
            .map_err(|e| format!("{:?}", e))?;
        root.draw(&Circle::new(center, radius, BLACK.stroke_width(1)))
            .map_err(|e| format!("{:?}", e))?;
    }

    Ok(())
}

fn to_px(p: (f64, f64)) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Crystal};
    use crate::render::scene::RenderOptions;

    #[test]
    fn test_render_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("co.png");

        let crystal = Crystal::molecule(
            "CO",
            vec![
                Atom::new("C", [0.0, 0.0, -0.657337]),
                Atom::new("O", [0.0, 0.0, 0.493003]),
            ],
        );
        let scene = Scene::from_crystal(&crystal, &RenderOptions::default()).unwrap();
        render_png(&scene, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_render_png_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let crystal = Crystal::molecule("H", vec![Atom::new("H", [0.0; 3])]);
        let scene = Scene::from_crystal(&crystal, &RenderOptions::default()).unwrap();
        assert!(matches!(
            render_png(&scene, &path),
            Err(SurfigError::RenderError { .. })
        ));
    }
}
