//! CMakeLists.txt rendering

use crate::project::ProjectConfig;

const EXPORT_COMPILE_COMMANDS: &str = "set(CMAKE_EXPORT_COMPILE_COMMANDS ON)\n";

const SINGLE_SOURCE_TARGET: &str = "add_executable(${PROJECT_NAME} src/main.cpp)\n";

const DISCOVERED_SOURCES_TARGET: &str = r#"# add all cpp files
file(GLOB_RECURSE SOURCES "src/*.cpp")
# add the main executable
add_executable(${PROJECT_NAME} ${SOURCES})

# automatically adds new source files
foreach(_source ${SOURCES})
    set_property(DIRECTORY APPEND PROPERTY CMAKE_CONFIGURE_DEPENDS ${_source})
endforeach()
"#;

const COPY_ASSETS_TARGET: &str = r#"add_custom_target(copy_resources ALL
COMMAND ${CMAKE_COMMAND} -E copy_directory
${PROJECT_SOURCE_DIR}/assets
${PROJECT_BINARY_DIR}/assets
COMMENT "Copying resources into binary directory")
add_dependencies(${PROJECT_NAME} copy_resources)
"#;

/// Render the build descriptor for the collected configuration.
///
/// The three optional blocks (compile-command export, recursive source
/// discovery, asset copying) are toggled in and out as fixed text; nothing
/// else varies beyond the interpolated name, version, and standard.
pub fn render_cmakelists(config: &ProjectConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "cmake_minimum_required(VERSION {})\n",
        config.cmake_version
    ));
    out.push_str(&format!("project({})\n\n", config.executable_name));
    if config.export_compile_commands {
        out.push_str(EXPORT_COMPILE_COMMANDS);
    }
    out.push_str(&format!("set(CMAKE_CXX_STANDARD {})\n\n", config.cpp_standard));
    if config.discover_sources {
        out.push_str(DISCOVERED_SOURCES_TARGET);
    } else {
        out.push_str(SINGLE_SOURCE_TARGET);
    }
    if config.copy_assets {
        out.push('\n');
        out.push_str(COPY_ASSETS_TARGET);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn demo_config() -> ProjectConfig {
        ProjectConfig {
            root: PathBuf::from("/tmp/demo"),
            executable_name: "demo".to_string(),
            cmake_version: "3.10".to_string(),
            cpp_standard: "17".to_string(),
            discover_sources: false,
            export_compile_commands: true,
            copy_assets: false,
        }
    }

    #[test]
    fn single_source_descriptor() {
        let content = render_cmakelists(&demo_config());
        assert!(content.starts_with("cmake_minimum_required(VERSION 3.10)\n"));
        assert!(content.contains("project(demo)"));
        assert!(content.contains("set(CMAKE_EXPORT_COMPILE_COMMANDS ON)"));
        assert!(content.contains("set(CMAKE_CXX_STANDARD 17)"));
        assert!(content.contains("add_executable(${PROJECT_NAME} src/main.cpp)"));
        assert!(!content.contains("GLOB_RECURSE"));
        assert!(!content.contains("copy_resources"));
    }

    #[test]
    fn discovered_sources_replace_single_target() {
        let mut config = demo_config();
        config.discover_sources = true;
        let content = render_cmakelists(&config);
        assert!(content.contains("file(GLOB_RECURSE SOURCES \"src/*.cpp\")"));
        assert!(content.contains("CMAKE_CONFIGURE_DEPENDS"));
        assert!(!content.contains("add_executable(${PROJECT_NAME} src/main.cpp)"));
    }

    #[test]
    fn compile_commands_block_is_optional() {
        let mut config = demo_config();
        config.export_compile_commands = false;
        let content = render_cmakelists(&config);
        assert!(!content.contains("CMAKE_EXPORT_COMPILE_COMMANDS"));
    }

    #[test]
    fn asset_copy_block_is_appended_when_enabled() {
        let mut config = demo_config();
        config.copy_assets = true;
        let content = render_cmakelists(&config);
        assert!(content.contains("add_custom_target(copy_resources ALL"));
        assert!(content.contains("add_dependencies(${PROJECT_NAME} copy_resources)"));
    }
}
