use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    Compute,
    TessellationControl,
    TessellationEvaluation,
}

const STAGE_EXTENSIONS: [(&str, ShaderStage); 6] = [
    (".vert", ShaderStage::Vertex),
    (".frag", ShaderStage::Fragment),
    (".geom", ShaderStage::Geometry),
    (".comp", ShaderStage::Compute),
    (".tesc", ShaderStage::TessellationControl),
    (".tese", ShaderStage::TessellationEvaluation),
];

impl ShaderStage {
    /// Classifies a file name by its trailing extension. Matching is exact and
    /// case-sensitive, so `a.VERT` and `a.vert.in` are not shader sources.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        STAGE_EXTENSIONS
            .iter()
            .find(|(extension, _)| file_name.ends_with(extension))
            .map(|(_, stage)| *stage)
    }

    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => ".vert",
            ShaderStage::Fragment => ".frag",
            ShaderStage::Geometry => ".geom",
            ShaderStage::Compute => ".comp",
            ShaderStage::TessellationControl => ".tesc",
            ShaderStage::TessellationEvaluation => ".tese",
        }
    }
}

pub fn is_glsl_source(file_name: &str) -> bool {
    ShaderStage::from_file_name(file_name).is_some()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub file_name: String, // e.g. mesh.vert, used verbatim as the output prefix
    pub path: PathBuf,
    pub stage: ShaderStage,
}
