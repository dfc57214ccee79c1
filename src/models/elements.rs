//! # 元素周期表数据
//!
//! 提供原子序数、原子质量、共价半径、Jmol 配色以及 fcc 参考晶格常数。
//!
//! ## 数据来源
//! - 共价半径: Cordero et al., Dalton Trans. (2008) 2832
//! - 配色: Jmol 默认 CPK 配色
//! - fcc 晶格常数: 常温实验值 (Å)
//!
//! ## 依赖关系
//! - 被 `build/`、`models/structure.rs`、`render/` 使用
//! - 纯静态数据，无外部依赖

/// 单个元素的静态数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub symbol: &'static str,
    pub number: u8,
    /// 标准原子质量 (u)
    pub mass: f64,
    /// 共价半径 (Å)
    pub covalent_radius: f64,
    /// Jmol 配色 (r, g, b)
    pub color: (u8, u8, u8),
    /// 基态为 fcc 时的参考晶格常数 (Å)
    pub fcc_lattice_constant: Option<f64>,
}

const fn el(
    symbol: &'static str,
    number: u8,
    mass: f64,
    covalent_radius: f64,
    color: u32,
    fcc_lattice_constant: Option<f64>,
) -> Element {
    Element {
        symbol,
        number,
        mass,
        covalent_radius,
        color: (
            ((color >> 16) & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            (color & 0xff) as u8,
        ),
        fcc_lattice_constant,
    }
}

/// 元素表，按原子序数排列 (H .. Lr)
pub static ELEMENTS: &[Element] = &[
    // --- Period 1 ---
    el("H", 1, 1.008, 0.31, 0xFFFFFF, None),
    el("He", 2, 4.0026, 0.28, 0xD9FFFF, None),
    // --- Period 2 ---
    el("Li", 3, 6.94, 1.28, 0xCC80FF, None),
    el("Be", 4, 9.0122, 0.96, 0xC2FF00, None),
    el("B", 5, 10.81, 0.84, 0xFFB5B5, None),
    el("C", 6, 12.011, 0.76, 0x909090, None),
    el("N", 7, 14.007, 0.71, 0x3050F8, None),
    el("O", 8, 15.999, 0.66, 0xFF0D0D, None),
    el("F", 9, 18.998, 0.57, 0x90E050, None),
    el("Ne", 10, 20.180, 0.58, 0xB3E3F5, Some(4.43)),
    // --- Period 3 ---
    el("Na", 11, 22.990, 1.66, 0xAB5CF2, None),
    el("Mg", 12, 24.305, 1.41, 0x8AFF00, None),
    el("Al", 13, 26.982, 1.21, 0xBFA6A6, Some(4.05)),
    el("Si", 14, 28.085, 1.11, 0xF0C8A0, None),
    el("P", 15, 30.974, 1.07, 0xFF8000, None),
    el("S", 16, 32.06, 1.05, 0xFFFF30, None),
    el("Cl", 17, 35.45, 1.02, 0x1FF01F, None),
    el("Ar", 18, 39.948, 1.06, 0x80D1E3, Some(5.26)),
    // --- Period 4 ---
    el("K", 19, 39.098, 2.03, 0x8F40D4, None),
    el("Ca", 20, 40.078, 1.76, 0x3DFF00, Some(5.58)),
    el("Sc", 21, 44.956, 1.70, 0xE6E6E6, None),
    el("Ti", 22, 47.867, 1.60, 0xBFC2C7, None),
    el("V", 23, 50.942, 1.53, 0xA6A6AB, None),
    el("Cr", 24, 51.996, 1.39, 0x8A99C7, None),
    el("Mn", 25, 54.938, 1.39, 0x9C7AC7, None),
    el("Fe", 26, 55.845, 1.32, 0xE06633, None),
    el("Co", 27, 58.933, 1.26, 0xF090A0, None),
    el("Ni", 28, 58.693, 1.24, 0x50D050, Some(3.52)),
    el("Cu", 29, 63.546, 1.32, 0xC88033, Some(3.61)),
    el("Zn", 30, 65.38, 1.22, 0x7D80B0, None),
    el("Ga", 31, 69.723, 1.22, 0xC28F8F, None),
    el("Ge", 32, 72.630, 1.20, 0x668F8F, None),
    el("As", 33, 74.922, 1.19, 0xBD80E3, None),
    el("Se", 34, 78.971, 1.20, 0xFFA100, None),
    el("Br", 35, 79.904, 1.20, 0xA62929, None),
    el("Kr", 36, 83.798, 1.16, 0x5CB8D1, Some(5.72)),
    // --- Period 5 ---
    el("Rb", 37, 85.468, 2.20, 0x702EB0, None),
    el("Sr", 38, 87.62, 1.95, 0x00FF00, Some(6.08)),
    el("Y", 39, 88.906, 1.90, 0x94FFFF, None),
    el("Zr", 40, 91.224, 1.75, 0x94E0E0, None),
    el("Nb", 41, 92.906, 1.64, 0x73C2C9, None),
    el("Mo", 42, 95.95, 1.54, 0x54B5B5, None),
    el("Tc", 43, 97.0, 1.47, 0x3B9E9E, None),
    el("Ru", 44, 101.07, 1.46, 0x248F8F, None),
    el("Rh", 45, 102.91, 1.42, 0x0A7D8C, Some(3.80)),
    el("Pd", 46, 106.42, 1.39, 0x006985, Some(3.89)),
    el("Ag", 47, 107.87, 1.45, 0xC0C0C0, Some(4.09)),
    el("Cd", 48, 112.41, 1.44, 0xFFD98F, None),
    el("In", 49, 114.82, 1.42, 0xA67573, None),
    el("Sn", 50, 118.71, 1.39, 0x668080, None),
    el("Sb", 51, 121.76, 1.39, 0x9E63B5, None),
    el("Te", 52, 127.60, 1.38, 0xD47A00, None),
    el("I", 53, 126.90, 1.39, 0x940094, None),
    el("Xe", 54, 131.29, 1.40, 0x429EB0, Some(6.20)),
    // --- Period 6 ---
    el("Cs", 55, 132.91, 2.44, 0x57178F, None),
    el("Ba", 56, 137.33, 2.15, 0x00C900, None),
    el("La", 57, 138.91, 2.07, 0x70D4FF, None),
    el("Ce", 58, 140.12, 2.04, 0xFFFFC7, Some(5.16)),
    el("Pr", 59, 140.91, 2.03, 0xD9FFC7, None),
    el("Nd", 60, 144.24, 2.01, 0xC7FFC7, None),
    el("Pm", 61, 145.0, 1.99, 0xA3FFC7, None),
    el("Sm", 62, 150.36, 1.98, 0x8FFFC7, None),
    el("Eu", 63, 151.96, 1.98, 0x61FFC7, None),
    el("Gd", 64, 157.25, 1.96, 0x45FFC7, None),
    el("Tb", 65, 158.93, 1.94, 0x30FFC7, None),
    el("Dy", 66, 162.50, 1.92, 0x1FFFC7, None),
    el("Ho", 67, 164.93, 1.92, 0x00FF9C, None),
    el("Er", 68, 167.26, 1.89, 0x00E675, None),
    el("Tm", 69, 168.93, 1.90, 0x00D452, None),
    el("Yb", 70, 173.05, 1.87, 0x00BF38, Some(5.49)),
    el("Lu", 71, 174.97, 1.87, 0x00AB24, None),
    el("Hf", 72, 178.49, 1.75, 0x4DC2FF, None),
    el("Ta", 73, 180.95, 1.70, 0x4DA6FF, None),
    el("W", 74, 183.84, 1.62, 0x2194D6, None),
    el("Re", 75, 186.21, 1.51, 0x267DAB, None),
    el("Os", 76, 190.23, 1.44, 0x266696, None),
    el("Ir", 77, 192.22, 1.41, 0x175487, Some(3.84)),
    el("Pt", 78, 195.08, 1.36, 0xD0D0E0, Some(3.92)),
    el("Au", 79, 196.97, 1.36, 0xFFD123, Some(4.08)),
    el("Hg", 80, 200.59, 1.32, 0xB8B8D0, None),
    el("Tl", 81, 204.38, 1.45, 0xA6544D, None),
    el("Pb", 82, 207.2, 1.46, 0x575961, Some(4.95)),
    el("Bi", 83, 208.98, 1.48, 0x9E4FB5, None),
    el("Po", 84, 209.0, 1.40, 0xAB5C00, None),
    el("At", 85, 210.0, 1.50, 0x754F45, None),
    el("Rn", 86, 222.0, 1.50, 0x428296, None),
    // --- Period 7 ---
    el("Fr", 87, 223.0, 2.60, 0x420066, None),
    el("Ra", 88, 226.0, 2.21, 0x007D00, None),
    el("Ac", 89, 227.0, 2.15, 0x70ABFA, Some(5.31)),
    el("Th", 90, 232.04, 2.06, 0x00BAFF, Some(5.08)),
    el("Pa", 91, 231.04, 2.00, 0x00A1FF, None),
    el("U", 92, 238.03, 1.96, 0x008FFF, None),
    el("Np", 93, 237.0, 1.90, 0x0080FF, None),
    el("Pu", 94, 244.0, 1.87, 0x006BFF, None),
    el("Am", 95, 243.0, 1.80, 0x545CF2, None),
    el("Cm", 96, 247.0, 1.69, 0x785CE3, None),
    // Bk 之后无 Cordero 数据，取 Pyykkö 单键半径
    el("Bk", 97, 247.0, 1.68, 0x8A4FE3, None),
    el("Cf", 98, 251.0, 1.68, 0xA136D4, None),
    el("Es", 99, 252.0, 1.65, 0xB31FD4, None),
    el("Fm", 100, 257.0, 1.67, 0xB31FBA, None),
    el("Md", 101, 258.0, 1.73, 0xB30DA6, None),
    el("No", 102, 259.0, 1.76, 0xBD0D87, None),
    el("Lr", 103, 262.0, 1.61, 0xC70066, None),
];

/// 按元素符号查找（区分大小写）
pub fn lookup(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// 原子质量；未知元素返回 1.0，使质心退化为几何中心
pub fn atomic_mass(symbol: &str) -> f64 {
    lookup(symbol).map(|e| e.mass).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_atomic_number() {
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.number as usize, i + 1, "{} out of order", e.symbol);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("Pt").map(|e| e.number), Some(78));
        assert!(lookup("PT").is_none());
        assert!(lookup("pt").is_none());
        assert!(lookup("Xx").is_none());
    }

    #[test]
    fn test_fcc_reference_states() {
        assert!((lookup("Cu").unwrap().fcc_lattice_constant.unwrap() - 3.61).abs() < 1e-9);
        assert!((lookup("Au").unwrap().fcc_lattice_constant.unwrap() - 4.08).abs() < 1e-9);
        // bcc / hcp 元素没有 fcc 参考值
        assert!(lookup("Fe").unwrap().fcc_lattice_constant.is_none());
        assert!(lookup("Ti").unwrap().fcc_lattice_constant.is_none());
    }

    #[test]
    fn test_colors_decoded() {
        assert_eq!(lookup("O").unwrap().color, (0xFF, 0x0D, 0x0D));
        assert_eq!(lookup("H").unwrap().color, (255, 255, 255));
    }

    #[test]
    fn test_table_covers_actinides() {
        assert_eq!(ELEMENTS.len(), 103);
        assert_eq!(lookup("U").map(|e| e.number), Some(92));
        assert_eq!(lookup("Lr").map(|e| e.number), Some(103));
        assert!(lookup("Pu").unwrap().fcc_lattice_constant.is_none());
    }
}
