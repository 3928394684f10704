//! Charm-style CLI prompts using cliclack

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::generators::{
    render_cmakelists, render_conanfile, render_readme, write_if_absent, write_source_stub,
};
use crate::packages::{Catalog, PackageList, SessionCommand};
use crate::project::{self, ProjectConfig, OTHER_ARTIFACTS, PROGRAMMING_ARTIFACTS};
use crate::toolchain::{check, script, vcs, version};
use crate::DEFAULT_CMAKE_VERSION;

/// Minimal working graphics example linked from the closing guidance.
const EXAMPLE_URL: &str = "https://github.com/cpp-toolbox/mwe_glfw/blob/main/src/main.cpp";

/// CLI arguments shared by the bootstrap entry points.
#[derive(Debug, Clone, Default)]
pub struct BootstrapArgs {
    /// Project root to use, skipping the directory prompt when given.
    pub directory: Option<PathBuf>,
}

/// Run the full guided setup.
pub async fn run(args: BootstrapArgs) -> Result<()> {
    cliclack::intro("C++ Project Bootstrapper")?;
    cliclack::log::remark("Press Enter to accept the default value for any prompt")?;

    report_toolchain();

    offer_artifact_cleanup()?;

    let root = resolve_root(&args)?;

    offer_readme(&root)?;
    create_cmakelists_interactive(&root)?;

    let (stub_path, written) = write_source_stub(&root)?;
    if written {
        cliclack::log::success(format!(
            "Created {} with a 'Hello, World!' program",
            stub_path.display()
        ))?;
    } else {
        cliclack::log::info(format!("{} already exists, keeping it", stub_path.display()))?;
    }

    offer_conanfile(&root).await?;
    offer_version_control(&root)?;
    offer_language_server_setup(&root).await?;

    print_next_steps()?;

    Ok(())
}

/// Run only the build-descriptor step.
pub fn run_cmakelists(args: BootstrapArgs) -> Result<()> {
    cliclack::intro("CMakeLists.txt setup")?;
    let root = resolve_root(&args)?;
    create_cmakelists_interactive(&root)?;
    cliclack::outro("Done")?;
    Ok(())
}

/// Run only the source-stub step.
pub fn run_source_stub(args: BootstrapArgs) -> Result<()> {
    cliclack::intro("Source stub")?;
    let root = resolve_root(&args)?;
    let (path, written) = write_source_stub(&root)?;
    if written {
        cliclack::log::success(format!(
            "Created {} with a 'Hello, World!' program",
            path.display()
        ))?;
    } else {
        cliclack::log::info(format!("{} already exists, keeping it", path.display()))?;
    }
    cliclack::outro("Done")?;
    Ok(())
}

/// Advisory summary of the tools the generated project leans on.
fn report_toolchain() {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");
    let tools = [
        check::check_gcc(),
        check::check_cmake(),
        check::check_conan(),
        check::check_git(),
    ];
    let summary: Vec<String> = tools
        .iter()
        .map(|tool| {
            if tool.available {
                format!("{} ({})", tool.name, tool.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", tool.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected tools: {}", summary.join(", ")));
}

/// On re-runs, offer deletion of previously generated artifacts.
///
/// Operates on the invocation directory; only files the user explicitly
/// selects are touched.
fn offer_artifact_cleanup() -> Result<()> {
    let first_run: bool =
        cliclack::confirm("Is this your first time running the bootstrapper on this project?")
            .initial_value(true)
            .interact()?;
    if first_run {
        return Ok(());
    }

    let cleanup: bool = cliclack::confirm("Remove some of the previously bootstrapped files?")
        .initial_value(false)
        .interact()?;
    if !cleanup {
        return Ok(());
    }

    delete_selected("Programming-related files to delete", PROGRAMMING_ARTIFACTS)?;
    delete_selected("Other files to delete", OTHER_ARTIFACTS)?;
    Ok(())
}

fn delete_selected(prompt: &str, candidates: &[&str]) -> Result<()> {
    let mut select = cliclack::multiselect(prompt);
    for name in candidates {
        select = select.item(*name, *name, "");
    }
    let chosen: Vec<&str> = select.required(false).interact()?;
    if chosen.is_empty() {
        return Ok(());
    }

    let confirmed: bool = cliclack::confirm(format!("Delete {}?", chosen.join(", ")))
        .initial_value(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    for name in chosen {
        match fs::remove_file(name) {
            Ok(()) => cliclack::log::success(format!("Deleted {}", name))?,
            Err(e) => cliclack::log::warning(format!("Could not delete {}: {}", name, e))?,
        }
    }
    Ok(())
}

fn resolve_root(args: &BootstrapArgs) -> Result<PathBuf> {
    if let Some(dir) = &args.directory {
        let root = project::resolve_project_root(&dir.to_string_lossy())?;
        cliclack::log::info(format!("Using project root {}", root.display()))?;
        return Ok(root);
    }

    let current = env::current_dir()?;
    let input: String = cliclack::input("Project root directory")
        .default_input(&current.to_string_lossy())
        .interact()?;
    let root = project::resolve_project_root(&input)?;
    cliclack::log::info(format!("Project root: {}", root.display()))?;
    Ok(root)
}

fn offer_readme(root: &Path) -> Result<()> {
    if root.join("README.md").exists() {
        return Ok(());
    }
    let wanted: bool = cliclack::confirm("Create a README.md for your project?")
        .initial_value(false)
        .interact()?;
    if !wanted {
        return Ok(());
    }

    let name: String = cliclack::input("Project name")
        .default_input(&project::default_executable_name(root))
        .interact()?;
    let description: String = cliclack::input("Short project description")
        .required(false)
        .interact()?;

    let path = root.join("README.md");
    write_if_absent(&path, &render_readme(&name, &description))?;
    cliclack::log::success(format!("Created {}", path.display()))?;
    Ok(())
}

/// Interactively collect descriptor choices and write CMakeLists.txt.
fn create_cmakelists_interactive(root: &Path) -> Result<()> {
    let descriptor = root.join("CMakeLists.txt");
    if descriptor.exists() {
        cliclack::log::warning(
            "CMakeLists.txt already exists; delete it and run again to reconfigure",
        )?;
        return Ok(());
    }

    let cmake_version: String = cliclack::input("Minimum CMake version")
        .default_input(DEFAULT_CMAKE_VERSION)
        .interact()?;

    warn_on_old_cmake(&cmake_version)?;

    let standards = available_standards()?;
    // The fallback list keeps this non-empty even when the probe fails.
    let newest = standards.last().expect("standards list is never empty").clone();
    let mut select = cliclack::select("C++ standard");
    for standard in &standards {
        select = select.item(standard.clone(), format!("C++{}", standard), "");
    }
    let cpp_standard: String = select.initial_value(newest).interact()?;

    let executable_name: String = cliclack::input("Executable name")
        .default_input(&project::default_executable_name(root))
        .validate(|input: &String| {
            if project::is_valid_executable_name(input) {
                Ok(())
            } else {
                Err("the executable name must not contain spaces")
            }
        })
        .interact()?;

    let discover_sources: bool =
        cliclack::confirm("Automatically pick up new source files (.cpp) as you work?")
            .initial_value(false)
            .interact()?;
    let export_compile_commands: bool =
        cliclack::confirm("Export compile commands? (needed for language servers)")
            .initial_value(false)
            .interact()?;
    let copy_assets: bool =
        cliclack::confirm("Copy an assets directory into the build directory?")
            .initial_value(false)
            .interact()?;

    let config = ProjectConfig {
        root: root.to_path_buf(),
        executable_name,
        cmake_version,
        cpp_standard,
        discover_sources,
        export_compile_commands,
        copy_assets,
    };

    write_if_absent(&descriptor, &render_cmakelists(&config))?;
    cliclack::log::success(format!("Created {}", descriptor.display()))?;
    Ok(())
}

fn warn_on_old_cmake(minimum: &str) -> Result<()> {
    let cmake = check::check_cmake();
    match cmake.version {
        Some(installed) => {
            if let Some(warning) = version::check_cmake_compatibility(&installed, minimum) {
                cliclack::log::warning(warning)?;
            }
        }
        None => {
            cliclack::log::warning("cmake was not found on PATH; install it before building")?;
        }
    }
    Ok(())
}

/// Probe gcc for usable standards, falling back to the full CMake list.
fn available_standards() -> Result<Vec<String>> {
    let spinner = cliclack::spinner();
    spinner.start("Probing compiler for supported C++ standards...");
    let probed = check::probe_cpp_standards();
    if probed.is_empty() {
        spinner.stop("Compiler probe found nothing usable");
        cliclack::log::warning("Falling back to the standards CMake supports")?;
        return Ok(check::CMAKE_CXX_STANDARDS.iter().map(|s| s.to_string()).collect());
    }

    let accepted: Vec<String> = probed.iter().map(|s| format!("C++{}", s)).collect();
    spinner.stop(format!("Compiler accepts: {}", accepted.join(", ")));
    Ok(probed)
}

async fn offer_conanfile(root: &Path) -> Result<()> {
    let manifest = root.join("conanfile.txt");
    if manifest.exists() {
        cliclack::log::warning(
            "conanfile.txt already exists; delete it and run again to reconfigure dependencies",
        )?;
        return Ok(());
    }

    let use_conan: bool = cliclack::confirm("Use conan for dependencies?")
        .initial_value(false)
        .interact()?;
    if !use_conan {
        return Ok(());
    }

    let mut packages = PackageList::new();
    offer_quick_pick(&mut packages)?;
    run_package_session(&mut packages).await?;

    if packages.is_empty() {
        cliclack::log::info("No packages were added, skipping conanfile.txt")?;
        return Ok(());
    }

    write_if_absent(&manifest, &render_conanfile(&packages))?;
    cliclack::log::success(format!(
        "Created {} with: {}",
        manifest.display(),
        packages.specs().collect::<Vec<_>>().join(", ")
    ))?;
    Ok(())
}

fn offer_quick_pick(packages: &mut PackageList) -> Result<()> {
    let quick: bool =
        cliclack::confirm("Choose from a selection of commonly used packages first?")
            .initial_value(false)
            .interact()?;
    if !quick {
        return Ok(());
    }

    let catalog = Catalog::load()?;
    let mut select = cliclack::multiselect("Quick-pick packages");
    for entry in &catalog.packages {
        select = select.item(entry.spec.clone(), entry.spec.clone(), entry.summary.clone());
    }
    let chosen: Vec<String> = select.required(false).interact()?;
    packages.extend_unique(chosen.iter().map(String::as_str));
    Ok(())
}

async fn run_package_session(packages: &mut PackageList) -> Result<()> {
    cliclack::note(
        "Conan package management",
        "search <name>         look a package up on conancenter\n\
         add <pkg/version>     add a package to the project\n\
         remove <pkg/version>  drop a previously added package\n\
         done                  finish",
    )?;

    loop {
        let line: String = cliclack::input("conan>").required(false).interact()?;
        match SessionCommand::parse(&line) {
            Some(SessionCommand::Done) => break,
            Some(SessionCommand::Search(name)) => {
                if let Err(e) = script::search_packages(&name).await {
                    cliclack::log::error(format!("Search failed: {}", e))?;
                }
            }
            Some(SessionCommand::Add(spec)) => {
                if packages.add(&spec) {
                    cliclack::log::success(format!("Added '{}'", spec))?;
                } else {
                    cliclack::log::warning(format!("'{}' is already on the list", spec))?;
                }
            }
            Some(SessionCommand::Remove(spec)) => {
                if packages.remove(&spec) {
                    cliclack::log::success(format!("Removed '{}'", spec))?;
                } else {
                    cliclack::log::warning(format!("'{}' was not on the list", spec))?;
                }
            }
            None => {
                cliclack::log::error("Invalid command. Use 'search', 'add', 'remove', or 'done'.")?;
            }
        }
    }
    Ok(())
}

fn offer_version_control(root: &Path) -> Result<()> {
    if !vcs::is_git_repo(root) {
        cliclack::log::info("The project root is not a git repository")?;
        let init: bool = cliclack::confirm("Initialize a git repository here?")
            .initial_value(false)
            .interact()?;
        if init {
            match vcs::init_repo(root) {
                Ok(()) => cliclack::log::success(format!(
                    "Initialized an empty git repository in {}",
                    root.display()
                ))?,
                Err(e) => cliclack::log::error(format!("git init failed: {}", e))?,
            }
        }
    }

    // Submodules need a repository to attach to.
    if !vcs::is_git_repo(root) {
        return Ok(());
    }

    for submodule in vcs::submodule_catalog() {
        let wanted: bool =
            cliclack::confirm(format!("Add {} as a git submodule?", submodule.name))
                .initial_value(false)
                .interact()?;
        if !wanted {
            continue;
        }
        match vcs::add_submodule(root, &submodule.url) {
            Ok(()) => {
                cliclack::log::success(format!("Added {} as a git submodule", submodule.name))?
            }
            Err(e) => cliclack::log::error(format!("Could not add {}: {}", submodule.name, e))?,
        }
    }
    Ok(())
}

async fn offer_language_server_setup(root: &Path) -> Result<()> {
    let use_clangd: bool = cliclack::confirm("Will you be using clangd as a language server?")
        .initial_value(false)
        .interact()?;
    if !use_clangd {
        return Ok(());
    }

    // A machine with no Python interpreter cannot run the setup script at
    // all; that is a configuration problem worth stopping for.
    let python = script::find_python()?;
    if let Err(e) = script::run_format_setup(python, root).await {
        cliclack::log::error(format!("Formatting setup failed: {}", e))?;
    }
    Ok(())
}

fn print_next_steps() -> Result<()> {
    let steps = [
        "conan install .",
        "copy the generated link lines into CMakeLists.txt to link your libs",
        "cmake --preset conan-release && cmake --build --preset conan-release",
        "cd build/Release and run the executable",
    ];

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
    println!("  Minimal working graphics example: {}", EXAMPLE_URL);

    let open_example: bool = cliclack::confirm("Open the example in your browser?")
        .initial_value(false)
        .interact()?;
    if open_example {
        if let Err(e) = open::that(EXAMPLE_URL) {
            cliclack::log::warning(format!("Could not open the browser: {}", e))?;
        }
    }

    cliclack::outro("Project setup complete")?;
    Ok(())
}
