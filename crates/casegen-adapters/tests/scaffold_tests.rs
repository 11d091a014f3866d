//! End-to-end scaffolding through the core service with real adapters.

use std::path::{Path, PathBuf};

use casegen_adapters::{BuiltinRenderer, LocalFilesystem, MemoryFilesystem};
use casegen_core::prelude::*;

fn memory_service() -> (ScaffoldService, MemoryFilesystem) {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(BuiltinRenderer::new()), Box::new(fs.clone()));
    (service, fs)
}

fn under(root: &str, paths: &[&str]) -> Vec<PathBuf> {
    let mut v: Vec<PathBuf> = paths.iter().map(|p| Path::new(root).join(p)).collect();
    v.sort();
    v
}

#[test]
fn use_case_writes_the_fixed_file_set() {
    let (service, fs) = memory_service();

    service
        .generate_use_case(&UseCaseName::new("foo"), "/work")
        .unwrap();

    assert_eq!(
        fs.list_files(),
        under(
            "/work",
            &[
                "src/cases/foo/__tests__/index.test.ts",
                "src/cases/foo/impl/index.ts",
                "src/cases/foo/index.ts",
                "src/cases/foo/manager/index.ts",
                "src/cases/foo/types/index.ts",
                "src/controllers/fooController.ts",
                "src/repositories/fooRepository.ts",
                "src/shared/repository.ts",
            ]
        )
    );

    for dir in [
        "src/cases/foo/impl",
        "src/cases/foo/manager",
        "src/cases/foo/types",
        "src/cases/foo/__tests__",
        "src/controllers",
        "src/repositories",
        "src/shared",
    ] {
        assert!(fs.exists(&Path::new("/work").join(dir)), "missing {dir}");
    }
}

#[test]
fn rerun_overwrites_files_and_reuses_directories() {
    let (service, fs) = memory_service();
    let name = UseCaseName::new("foo");

    let first = service.generate_use_case(&name, "/work").unwrap();
    let dirs_after_first = fs.list_directories();

    let second = service.generate_use_case(&name, "/work").unwrap();

    assert_eq!(first.created_directories.len(), 8);
    assert!(second.created_directories.is_empty());
    assert_eq!(second.existing_directories.len(), 8);
    assert_eq!(second.files.len(), 8);
    assert_eq!(fs.list_directories(), dirs_after_first);
    assert_eq!(fs.list_files().len(), 8);
    assert_eq!(fs.write_count(), 16);
}

#[test]
fn second_use_case_shares_base_directories() {
    let (service, fs) = memory_service();

    service
        .generate_use_case(&UseCaseName::new("foo"), "/work")
        .unwrap();
    let report = service
        .generate_use_case(&UseCaseName::new("bar"), "/work")
        .unwrap();

    assert!(
        report
            .existing_directories
            .contains(&PathBuf::from("src/controllers"))
    );
    assert!(fs.exists(Path::new("/work/src/controllers/barController.ts")));
    assert!(fs.exists(Path::new("/work/src/controllers/fooController.ts")));
}

#[test]
fn empty_project_writes_manifest_files() {
    let (service, fs) = memory_service();
    let info = ProjectInfo::new("billing", "Ada", "Billing service");

    let report = service
        .generate_empty_project(&info, &ManifestSettings::default(), "/work")
        .unwrap();

    assert_eq!(report.mode, Mode::EmptyProject);
    assert_eq!(
        fs.list_files(),
        under(
            "/work/billing",
            &["README.md", "package.json", "src/.env.ts", "tsconfig.json"]
        )
    );

    let manifest = fs
        .read_file(Path::new("/work/billing/package.json"))
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["name"], "billing");
}

#[test]
fn local_filesystem_overwrites_edited_files() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(
        Box::new(BuiltinRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let name = UseCaseName::new("getUser");

    service.generate_use_case(&name, tmp.path()).unwrap();
    let controller = tmp.path().join("src/controllers/getUserController.ts");
    std::fs::write(&controller, "edited").unwrap();

    service.generate_use_case(&name, tmp.path()).unwrap();

    let content = std::fs::read_to_string(&controller).unwrap();
    assert!(content.contains("export default class GetUserController {"));
    assert!(content.contains("getUserRepository: GetUserRepository;"));
}
