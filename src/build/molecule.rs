//! # 气相小分子数据库
//!
//! 常见吸附气体分子的参考几何（G2 构型，笛卡尔坐标，单位 Å）。
//!
//! ## 依赖关系
//! - 被 `build/gas.rs` 调用
//! - 使用 `models/structure.rs`

use crate::models::{Atom, Crystal};

use thiserror::Error;

/// 分子构建错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("Unknown molecule: {0}")]
    Unknown(String),
}

type Geometry = &'static [(&'static str, [f64; 3])];

static MOLECULES: &[(&str, Geometry)] = &[
    // 双原子
    ("H2", &[("H", [0.0, 0.0, 0.368583]), ("H", [0.0, 0.0, -0.368583])]),
    ("N2", &[("N", [0.0, 0.0, 0.56499]), ("N", [0.0, 0.0, -0.56499])]),
    ("O2", &[("O", [0.0, 0.0, 0.622978]), ("O", [0.0, 0.0, -0.622978])]),
    ("F2", &[("F", [0.0, 0.0, 0.710304]), ("F", [0.0, 0.0, -0.710304])]),
    ("Cl2", &[("Cl", [0.0, 0.0, 1.007541]), ("Cl", [0.0, 0.0, -1.007541])]),
    ("CO", &[("O", [0.0, 0.0, 0.493003]), ("C", [0.0, 0.0, -0.657337])]),
    ("NO", &[("N", [0.0, 0.0, -0.609442]), ("O", [0.0, 0.0, 0.533261])]),
    ("HF", &[("F", [0.0, 0.0, 0.093389]), ("H", [0.0, 0.0, -0.840502])]),
    ("HCl", &[("Cl", [0.0, 0.0, 0.07111]), ("H", [0.0, 0.0, -1.208868])]),
    // 三原子
    (
        "CO2",
        &[
            ("C", [0.0, 0.0, 0.0]),
            ("O", [0.0, 0.0, 1.178658]),
            ("O", [0.0, 0.0, -1.178658]),
        ],
    ),
    (
        "H2O",
        &[
            ("O", [0.0, 0.0, 0.119262]),
            ("H", [0.0, 0.763239, -0.477047]),
            ("H", [0.0, -0.763239, -0.477047]),
        ],
    ),
    (
        "H2S",
        &[
            ("S", [0.0, 0.0, 0.102135]),
            ("H", [0.0, 0.974269, -0.817083]),
            ("H", [0.0, -0.974269, -0.817083]),
        ],
    ),
    (
        "SO2",
        &[
            ("S", [0.0, 0.0, 0.370268]),
            ("O", [0.0, 1.277617, -0.370268]),
            ("O", [0.0, -1.277617, -0.370268]),
        ],
    ),
    (
        "NO2",
        &[
            ("N", [0.0, 0.0, 0.332273]),
            ("O", [0.0, 1.118122, -0.14537]),
            ("O", [0.0, -1.118122, -0.14537]),
        ],
    ),
    (
        "N2O",
        &[
            ("N", [0.0, 0.0, -1.231749]),
            ("N", [0.0, 0.0, -0.060053]),
            ("O", [0.0, 0.0, 1.131188]),
        ],
    ),
    (
        "O3",
        &[
            ("O", [0.0, 1.10381, -0.228542]),
            ("O", [0.0, 0.0, 0.457084]),
            ("O", [0.0, -1.10381, -0.228542]),
        ],
    ),
    (
        "HCN",
        &[
            ("C", [0.0, 0.0, -0.511747]),
            ("N", [0.0, 0.0, 0.664461]),
            ("H", [0.0, 0.0, -1.580746]),
        ],
    ),
    // 多原子
    (
        "NH3",
        &[
            ("N", [0.0, 0.0, 0.116489]),
            ("H", [0.0, 0.939731, -0.271808]),
            ("H", [0.813831, -0.469865, -0.271808]),
            ("H", [-0.813831, -0.469865, -0.271808]),
        ],
    ),
    (
        "CH4",
        &[
            ("C", [0.0, 0.0, 0.0]),
            ("H", [0.629118, 0.629118, 0.629118]),
            ("H", [-0.629118, -0.629118, 0.629118]),
            ("H", [0.629118, -0.629118, -0.629118]),
            ("H", [-0.629118, 0.629118, -0.629118]),
        ],
    ),
    (
        "C2H2",
        &[
            ("C", [0.0, 0.0, 0.60808]),
            ("C", [0.0, 0.0, -0.60808]),
            ("H", [0.0, 0.0, -1.67399]),
            ("H", [0.0, 0.0, 1.67399]),
        ],
    ),
    (
        "C2H4",
        &[
            ("C", [0.0, 0.0, 0.66748]),
            ("C", [0.0, 0.0, -0.66748]),
            ("H", [0.0, 0.922832, 1.237695]),
            ("H", [0.0, -0.922832, 1.237695]),
            ("H", [0.0, 0.922832, -1.237695]),
            ("H", [0.0, -0.922832, -1.237695]),
        ],
    ),
    (
        "C2H6",
        &[
            ("C", [0.0, 0.0, 0.762209]),
            ("C", [0.0, 0.0, -0.762209]),
            ("H", [0.0, 1.018957, 1.157229]),
            ("H", [-0.882443, -0.509479, 1.157229]),
            ("H", [0.882443, -0.509479, 1.157229]),
            ("H", [0.0, -1.018957, -1.157229]),
            ("H", [-0.882443, 0.509479, -1.157229]),
            ("H", [0.882443, 0.509479, -1.157229]),
        ],
    ),
    (
        "CH3OH",
        &[
            ("C", [-0.047131, 0.664389, 0.0]),
            ("O", [-0.047131, -0.758551, 0.0]),
            ("H", [-1.092995, 0.969785, 0.0]),
            ("H", [0.878534, -1.048458, 0.0]),
            ("H", [0.437145, 1.080376, 0.891772]),
            ("H", [0.437145, 1.080376, -0.891772]),
        ],
    ),
    (
        "CH3CN",
        &[
            ("C", [0.0, 0.0, -1.18693]),
            ("C", [0.0, 0.0, 0.273874]),
            ("N", [0.0, 0.0, 1.452206]),
            ("H", [0.0, 1.024986, -1.56237]),
            ("H", [0.887664, -0.512493, -1.56237]),
            ("H", [-0.887664, -0.512493, -1.56237]),
        ],
    ),
    (
        "H2CO",
        &[
            ("O", [0.0, 0.0, 0.683501]),
            ("C", [0.0, 0.0, -0.536614]),
            ("H", [0.0, 0.93439, -1.124164]),
            ("H", [0.0, -0.93439, -1.124164]),
        ],
    ),
    (
        "HCOOH",
        &[
            ("O", [-1.040945, -0.436432, 0.0]),
            ("C", [0.0, 0.423949, 0.0]),
            ("O", [1.169372, 0.103741, 0.0]),
            ("H", [-0.64957, -1.335724, 0.0]),
            ("H", [-0.377847, 1.452767, 0.0]),
        ],
    ),
    (
        "CH3CHO",
        &[
            ("O", [1.218055, 0.36124, 0.0]),
            ("C", [0.0, 0.464133, 0.0]),
            ("H", [-0.477241, 1.465295, 0.0]),
            ("C", [-0.948102, -0.700138, 0.0]),
            ("H", [-0.385946, -1.634236, 0.0]),
            ("H", [-1.596321, -0.652475, 0.880946]),
            ("H", [-1.596321, -0.652475, -0.880946]),
        ],
    ),
    (
        "CH3CH2OH",
        &[
            ("C", [1.168181, -0.400382, 0.0]),
            ("C", [0.0, 0.559462, 0.0]),
            ("O", [-1.190083, -0.227669, 0.0]),
            ("H", [-1.946623, 0.381525, 0.0]),
            ("H", [0.042557, 1.207508, 0.886933]),
            ("H", [0.042557, 1.207508, -0.886933]),
            ("H", [2.115891, 0.1448, 0.0]),
            ("H", [1.128599, -1.037234, 0.885881]),
            ("H", [1.128599, -1.037234, -0.885881]),
        ],
    ),
    (
        "H2O2",
        &[
            ("O", [0.0, 0.734058, -0.05275]),
            ("O", [0.0, -0.734058, -0.05275]),
            ("H", [0.839547, 0.880752, 0.422001]),
            ("H", [-0.839547, -0.880752, 0.422001]),
        ],
    ),
    (
        "C6H6",
        &[
            ("C", [0.0, 1.395248, 0.0]),
            ("C", [1.20832, 0.697624, 0.0]),
            ("C", [1.20832, -0.697624, 0.0]),
            ("C", [0.0, -1.395248, 0.0]),
            ("C", [-1.20832, -0.697624, 0.0]),
            ("C", [-1.20832, 0.697624, 0.0]),
            ("H", [0.0, 2.48236, 0.0]),
            ("H", [2.149787, 1.24118, 0.0]),
            ("H", [2.149787, -1.24118, 0.0]),
            ("H", [0.0, -2.48236, 0.0]),
            ("H", [-2.149787, -1.24118, 0.0]),
            ("H", [-2.149787, 1.24118, 0.0]),
        ],
    ),
    // 自由基与无机小分子
    ("OH", &[("O", [0.0, 0.0, 0.108786]), ("H", [0.0, 0.0, -0.870284])]),
    ("CN", &[("C", [0.0, 0.0, -0.611046]), ("N", [0.0, 0.0, 0.523753])]),
    ("CS", &[("C", [0.0, 0.0, -1.123382]), ("S", [0.0, 0.0, 0.421268])]),
    ("SO", &[("O", [0.0, 0.0, -1.015992]), ("S", [0.0, 0.0, 0.507996])]),
    (
        "NH2",
        &[
            ("N", [0.0, 0.0, 0.14169]),
            ("H", [0.0, 0.806442, -0.495913]),
            ("H", [0.0, -0.806442, -0.495913]),
        ],
    ),
    (
        "HCO",
        &[
            ("C", [0.06256, 0.593926, 0.0]),
            ("O", [0.06256, -0.596914, 0.0]),
            ("H", [-0.875835, 1.211755, 0.0]),
        ],
    ),
    (
        "CH3",
        &[
            ("C", [0.0, 0.0, 0.0]),
            ("H", [0.0, 1.07841, 0.0]),
            ("H", [0.93393, -0.539205, 0.0]),
            ("H", [-0.93393, -0.539205, 0.0]),
        ],
    ),
    (
        "SiH4",
        &[
            ("Si", [0.0, 0.0, 0.0]),
            ("H", [0.856135, 0.856135, 0.856135]),
            ("H", [-0.856135, -0.856135, 0.856135]),
            ("H", [-0.856135, 0.856135, -0.856135]),
            ("H", [0.856135, -0.856135, -0.856135]),
        ],
    ),
    (
        "PH3",
        &[
            ("P", [0.0, 0.0, 0.124619]),
            ("H", [0.0, 1.200647, -0.623095]),
            ("H", [1.039791, -0.600323, -0.623095]),
            ("H", [-1.039791, -0.600323, -0.623095]),
        ],
    ),
];

/// 按名称构建分子（区分大小写）
pub fn molecule(name: &str) -> Result<Crystal, MoleculeError> {
    let (_, geometry) = MOLECULES
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| MoleculeError::Unknown(name.to_string()))?;

    let atoms = geometry
        .iter()
        .map(|(symbol, position)| Atom::new(*symbol, *position))
        .collect();

    Ok(Crystal::molecule(name, atoms))
}

/// 数据库中全部分子名称
pub fn names() -> impl Iterator<Item = &'static str> {
    MOLECULES.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::elements;
    use crate::utils::geometry;

    #[test]
    fn test_known_molecules() {
        let co2 = molecule("CO2").unwrap();
        assert_eq!(co2.len(), 3);
        assert_eq!(co2.formula(), "CO2");
        assert_eq!(co2.pbc, [false; 3]);

        let nh3 = molecule("NH3").unwrap();
        assert_eq!(nh3.formula(), "H3N");
    }

    #[test]
    fn test_unknown_molecule() {
        assert_eq!(
            molecule("Pt"),
            Err(MoleculeError::Unknown("Pt".to_string()))
        );
        assert!(molecule("h2o").is_err());
    }

    #[test]
    fn test_all_entries_use_known_elements() {
        for name in names() {
            let mol = molecule(name).unwrap();
            for atom in &mol.atoms {
                assert!(
                    elements::lookup(&atom.element).is_some(),
                    "{} contains unknown element {}",
                    name,
                    atom.element
                );
            }
        }
    }

    #[test]
    fn test_bond_lengths_are_physical() {
        let h2 = molecule("H2").unwrap();
        let d = geometry::distance(h2.atoms[0].position, h2.atoms[1].position);
        assert!((d - 0.737166).abs() < 1e-6);

        let water = molecule("H2O").unwrap();
        let oh = geometry::distance(water.atoms[0].position, water.atoms[1].position);
        assert!(oh > 0.9 && oh < 1.0);

        let benzene = molecule("C6H6").unwrap();
        let cc = geometry::distance(benzene.atoms[0].position, benzene.atoms[1].position);
        assert!((cc - 1.395248).abs() < 1e-5);
    }

    #[test]
    fn test_organic_adsorbates() {
        assert_eq!(molecule("C6H6").unwrap().formula(), "C6H6");
        assert_eq!(molecule("CH3CH2OH").unwrap().len(), 9);
        assert_eq!(molecule("HCOOH").unwrap().composition().get("O"), Some(&2));
        assert_eq!(molecule("H2O2").unwrap().formula(), "H2O2");
        assert!(names().any(|n| n == "CH3CHO"));
    }
}
