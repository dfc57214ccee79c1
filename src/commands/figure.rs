//! # 出图命令实现
//!
//! 构建 fcc(111) slab，可选放置随机气体分子，渲染并保存 PNG。
//!
//! ## 流程
//! 1. 构建 slab
//! 2. 若同时给出气体与数量，随机放置吸附物
//! 3. 确定图像文件名（显式指定优先）
//! 4. 移除吸附元数据，渲染图像
//! 5. 可选导出结构文件
//!
//! ## 依赖关系
//! - 使用 `cli/figure.rs` 定义的参数
//! - 使用 `build/`、`render/`、`writers/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::build::{self, PlacementConfig, PlacementReport, SlabConfig};
use crate::cli::figure::FigureArgs;
use crate::error::{Result, SurfigError};
use crate::models::{Crystal, SurfaceInfo};
use crate::render::{self, RenderOptions, Scene};
use crate::utils::{output, progress};
use crate::writers::{self, StructureFormat};

use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 一次出图所需的全部参数
#[derive(Debug, Clone)]
pub struct FigureRequest {
    pub slab_element: String,
    /// 气体名称与数量
    pub gas: Option<(String, usize)>,
    /// 显式图像文件名
    pub image_name: Option<PathBuf>,
    pub slab: SlabConfig,
    pub placement: PlacementConfig,
    pub render: RenderOptions,
    pub save_structure: Option<PathBuf>,
}

impl FigureRequest {
    /// 仅 slab、全部默认参数
    pub fn new(slab_element: impl Into<String>) -> Self {
        FigureRequest {
            slab_element: slab_element.into(),
            gas: None,
            image_name: None,
            slab: SlabConfig::default(),
            placement: PlacementConfig::default(),
            render: RenderOptions::default(),
            save_structure: None,
        }
    }

    pub fn with_gas(mut self, gas: impl Into<String>, count: usize) -> Self {
        self.gas = Some((gas.into(), count));
        self
    }

    pub fn with_image_name(mut self, name: impl Into<PathBuf>) -> Self {
        self.image_name = Some(name.into());
        self
    }

    /// 从命令行参数构建
    pub fn from_args(args: &FigureArgs) -> Result<Self> {
        let gas = match (&args.gas_element, &args.gas_count) {
            (Some(element), Some(count)) => Some((element.clone(), parse_gas_count(count)?)),
            (None, None) => None,
            _ => return Err(SurfigError::Usage(usage().to_string())),
        };

        // 三参数形式按命令行原样命名，空气体名也保留在文件名中
        let image_name = args.output.clone().or_else(|| {
            gas.as_ref().map(|(element, count)| {
                PathBuf::from(default_image_name(
                    &args.slab_element,
                    Some((element.as_str(), *count)),
                ))
            })
        });

        Ok(FigureRequest {
            slab_element: args.slab_element.clone(),
            gas,
            image_name,
            slab: SlabConfig {
                size: args.size,
                vacuum: Some(args.vacuum),
                lattice_constant: args.lattice_constant,
            },
            placement: PlacementConfig {
                z_range: args.z_range,
            },
            render: RenderOptions {
                rotation: args.rotation.clone(),
                scale: args.scale,
                radius_scale: args.radius_scale,
                show_cell: args.show_cell,
                ..RenderOptions::default()
            },
            save_structure: args.save_structure.clone(),
        })
    }

    /// 有效的气体参数；空名称视为未指定
    fn gas(&self) -> Option<(&str, usize)> {
        self.gas
            .as_ref()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, count)| (name.as_str(), *count))
    }
}

/// 出图结果
#[derive(Debug)]
pub struct FigureOutcome {
    /// 最终结构（已移除吸附元数据）
    pub crystal: Crystal,
    pub image_path: PathBuf,
    pub placement: Option<PlacementReport>,
    /// 渲染前移除的吸附元数据
    pub surface_info: Option<SurfaceInfo>,
    pub structure_file: Option<(PathBuf, StructureFormat)>,
}

fn usage() -> &'static str {
    "Usage: surfig <slab_element>\n       surfig <slab_element> <gas_element> <gas_count>"
}

/// 解析气体数量
pub fn parse_gas_count(input: &str) -> Result<usize> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| SurfigError::Usage("gas_count must be an integer.".to_string()))?;

    usize::try_from(value).map_err(|_| {
        SurfigError::InvalidArgument(format!("gas_count must be non-negative, got {}", value))
    })
}

/// 默认图像文件名
pub fn default_image_name(slab_element: &str, gas: Option<(&str, usize)>) -> String {
    match gas {
        Some((element, count)) => format!("{}_{}_{}.png", slab_element, element, count),
        None => format!("{}.png", slab_element),
    }
}

/// 构建、放置、渲染；返回最终结构
pub fn make_surface_figure<R: Rng + ?Sized>(
    request: &FigureRequest,
    rng: &mut R,
    pb: &ProgressBar,
) -> Result<FigureOutcome> {
    let mut slab = build::fcc111(&request.slab_element, &request.slab)?;

    let placement = match request.gas() {
        Some((gas, count)) => Some(build::add_gas(
            &mut slab,
            gas,
            count,
            &request.placement,
            rng,
            pb,
        )?),
        None => None,
    };
    pb.finish_and_clear();

    let image_path = request.image_name.clone().unwrap_or_else(|| {
        PathBuf::from(default_image_name(&request.slab_element, request.gas()))
    });

    // 吸附元数据不参与出图
    let surface_info = slab.take_adsorbate_info();

    let scene = Scene::from_crystal(&slab, &request.render)?;
    render::render_png(&scene, &image_path)?;

    let structure_file = match &request.save_structure {
        Some(path) => {
            let format = writers::write_structure(&slab, path)?;
            Some((path.clone(), format))
        }
        None => None,
    };

    Ok(FigureOutcome {
        crystal: slab,
        image_path,
        placement,
        surface_info,
        structure_file,
    })
}

/// 仅在确实放置气体时创建进度条
fn placement_progress(request: &FigureRequest) -> Option<ProgressBar> {
    request
        .gas()
        .map(|_| progress::create_progress_bar(0, "Placing gas"))
}

/// 组成表行
#[derive(Debug, Clone, Tabled)]
struct CompositionRow {
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Atoms")]
    count: usize,
}

/// 执行出图命令
pub fn execute(args: FigureArgs) -> Result<()> {
    let request = FigureRequest::from_args(&args)?;

    output::print_header("fcc(111) Surface Figure");

    match &request.gas {
        Some((gas, count)) => output::print_info(&format!(
            "{} slab with {} {} molecules will be created.",
            request.slab_element, count, gas
        )),
        None => output::print_info(&format!(
            "{} slab model will be created.",
            request.slab_element
        )),
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    output::print_info(&format!("Random seed: {}", seed));
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = placement_progress(&request).unwrap_or_else(ProgressBar::hidden);
    let outcome = make_surface_figure(&request, &mut rng, &pb)?;

    let (a, b, c, _, _, gamma) = outcome.crystal.lattice.parameters();
    output::print_info(&format!(
        "Cell: a = {:.3} Å, b = {:.3} Å, c = {:.3} Å, γ = {:.1}°",
        a, b, c, gamma
    ));

    if let Some(info) = &outcome.surface_info {
        let site_names: Vec<&str> = info.sites.iter().map(|s| s.name).collect();
        output::print_info(&format!(
            "Top layer at z = {:.3} Å, surface spacing {:.3} Å, sites: {}",
            info.top_layer_z,
            info.cell[0][0].hypot(info.cell[0][1]),
            site_names.join(", ")
        ));
    }

    if let (Some(report), Some((gas, _))) = (&outcome.placement, request.gas()) {
        if report.bare_atoms() > 0 {
            output::print_warning(&format!(
                "'{}' is not a known molecule; placed {} bare {} atom(s)",
                gas,
                report.bare_atoms(),
                gas
            ));
            output::print_info(&format!(
                "Known molecules: {}",
                build::molecule::names().collect::<Vec<_>>().join(", ")
            ));
        } else {
            output::print_success(&format!(
                "Placed {} {} molecule(s) with random orientation",
                report.molecules(),
                gas
            ));
        }
    }

    let rows: Vec<CompositionRow> = outcome
        .crystal
        .composition()
        .into_iter()
        .map(|(element, count)| CompositionRow {
            element: element.to_string(),
            count,
        })
        .collect();
    println!("{}", Table::new(rows));

    if let Some((path, format)) = &outcome.structure_file {
        output::print_success(&format!(
            "Structure written to {} ({})",
            path.display(),
            format
        ));
    }

    output::print_done(&format!("Image saved as {}", outcome.image_path.display()));
    Ok(())
}
