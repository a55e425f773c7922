use std::cmp::Ordering;
use std::env;

// Target features that have an accelerated lane backend
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_arch: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "sse" => 0,
            "neon" => 1,
            "simd128" => 2,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all supported CPU features that have a backend in this crate
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse",
                target_arch: &["x86", "x86_64"],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_arch: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
            CpuFeature {
                name: "simd128",
                target_arch: &["wasm32"],
                cfg_flag: "wasm_simd",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Reads the features cargo resolved for the *target*, so cross builds select
// the backend of the machine the code will run on.
struct TargetDetector {
    arch: String,
    enabled: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(|feature| feature.trim().to_string())
            .filter(|feature| !feature.is_empty())
            .collect();

        Self { arch, enabled }
    }
}

impl CpuFeatureDetector for TargetDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.target_arch.contains(&self.arch.as_str())
                && self.enabled.iter().any(|enabled| enabled == feature.name);
        }
    }

    fn is_applicable(&self) -> bool {
        !self.arch.is_empty()
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn fallback_forced() -> bool {
        let by_feature = env::var_os("CARGO_FEATURE_FORCE_FALLBACK").is_some();
        let by_env = env::var("VGMATH_BACKEND")
            .map(|value| value.eq_ignore_ascii_case("fallback"))
            .unwrap_or(false);

        by_feature || by_env
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        let detector = TargetDetector::from_env();

        if detector.is_applicable() {
            detector.detect_features(features);
        }
    }

    fn apply(features: &mut [CpuFeature]) {
        // Sort features by priority (highest first)
        features.sort();

        // Use the highest detected feature, or the reference backend
        let cfg_flag = if Self::fallback_forced() {
            "fallback"
        } else {
            features
                .iter()
                .find(|cpu_feature| cpu_feature.detected)
                .map(|cpu_feature| cpu_feature.cfg_flag)
                .unwrap_or("fallback")
        };

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(wasm_simd)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VGMATH_BACKEND");

    let mut features = CpuFeature::features();

    PlatformDetector::detect_cpu_features(&mut features);

    PlatformDetector::apply(&mut features);
}
