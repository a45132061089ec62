mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::ProgramError;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_wraps_program_errors() {
        let err: RendererError = ProgramError::Contract {
            program: "points".into(),
            message: "missing attribute `random`".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "program error: program 'points' breaks its binding layout: missing attribute `random`"
        );
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize {
            width: 1600,
            height: 800,
        };
        assert!((size.aspect() - 2.0).abs() < 1e-6);
        let flat = PhysicalSize {
            width: 10,
            height: 0,
        };
        assert_eq!(flat.aspect(), 1.0);
    }
}
