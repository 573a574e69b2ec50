use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum TextureError {
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    AtlasTooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "failed to load texture atlas {}: {source}", path.display())
            }
            Self::AtlasTooSmall {
                width,
                height,
                required_width,
                required_height,
            } => write!(
                f,
                "texture atlas is {width}x{height}, need at least {required_width}x{required_height}"
            ),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::AtlasTooSmall { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum GpuInitError {
    CreateSurface(wgpu::CreateSurfaceError),
    NoAdapter,
    RequestDevice(wgpu::RequestDeviceError),
    UnsupportedSurface,
}

impl fmt::Display for GpuInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateSurface(err) => write!(f, "failed to create window surface: {err}"),
            Self::NoAdapter => write!(f, "no graphics adapter compatible with the window surface"),
            Self::RequestDevice(err) => write!(f, "failed to create graphics device: {err}"),
            Self::UnsupportedSurface => {
                write!(f, "window surface is not supported by the selected adapter")
            }
        }
    }
}

impl std::error::Error for GpuInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateSurface(err) => Some(err),
            Self::RequestDevice(err) => Some(err),
            Self::NoAdapter | Self::UnsupportedSurface => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuInitError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        Self::CreateSurface(err)
    }
}

impl From<wgpu::RequestDeviceError> for GpuInitError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        Self::RequestDevice(err)
    }
}
