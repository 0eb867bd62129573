use folder_template::prelude::*;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn scripted(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
    ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(prompt: ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(prompt.into_inner().1).unwrap()
}

#[test]
fn test_create_new_project() {
    let temp = TempDir::new().unwrap();
    let template = FolderTemplate::create_default();
    let mut prompt = scripted("");

    let outcome = create_project(
        &template,
        temp.path(),
        "Solární park",
        &FsDirectoryCreator,
        &mut prompt,
    )
    .unwrap();

    let project = temp.path().join("Solární park");
    match outcome {
        ProjectOutcome::Created { path, folders } => {
            assert_eq!(path, project);
            assert_eq!(folders.len(), 11);
            assert!(folders.iter().all(|folder| folder.starts_with(&project)));
        }
        ProjectOutcome::Cancelled => panic!("project was not created"),
    }
    assert!(project.join("Komunikace/Interní").is_dir());

    // Nothing to confirm for a new folder
    assert!(output_of(prompt).is_empty());
}

#[test]
fn test_blank_project_name() {
    let temp = TempDir::new().unwrap();
    let mut prompt = scripted("");

    let err = create_project(
        &FolderTemplate::create_default(),
        temp.path(),
        "  ",
        &FsDirectoryCreator,
        &mut prompt,
    )
    .unwrap_err();

    assert!(matches!(err, Error::EmptyProjectName));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_project_declined() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("Projekt");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("poznamky.txt"), "důležité").unwrap();
    let mut prompt = scripted("n\n");

    let outcome = create_project(
        &FolderTemplate::create_default(),
        temp.path(),
        "Projekt",
        &FsDirectoryCreator,
        &mut prompt,
    )
    .unwrap();

    assert_eq!(outcome, ProjectOutcome::Cancelled);
    assert!(project.join("poznamky.txt").exists());
    assert!(!project.join("Dokumentace").exists());
    assert!(output_of(prompt).contains("již existuje"));
}

#[test]
fn test_existing_project_replaced() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("Projekt");
    fs::create_dir_all(project.join("Stará složka")).unwrap();
    fs::write(project.join("poznamky.txt"), "staré").unwrap();
    let mut prompt = scripted("A\n");

    let mut template = FolderTemplate::new();
    template.add_root("Fotografie");

    let outcome = create_project(
        &template,
        temp.path(),
        "Projekt",
        &FsDirectoryCreator,
        &mut prompt,
    )
    .unwrap();

    assert!(matches!(outcome, ProjectOutcome::Created { .. }));
    assert!(project.join("Fotografie").is_dir());
    assert!(!project.join("Stará složka").exists());
    assert!(!project.join("poznamky.txt").exists());
}

#[test]
fn test_existing_project_at_end_of_input_is_kept() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("Projekt");
    fs::create_dir(&project).unwrap();
    let mut prompt = scripted("");

    let outcome = create_project(
        &FolderTemplate::create_default(),
        temp.path(),
        "Projekt",
        &FsDirectoryCreator,
        &mut prompt,
    )
    .unwrap();

    assert_eq!(outcome, ProjectOutcome::Cancelled);
    assert!(!project.join("Dokumentace").exists());
}

#[test]
fn test_file_at_project_path_is_not_replaced() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("Projekt");
    fs::write(&project, "důležité").unwrap();
    let mut prompt = scripted("a\n");

    let err = create_project(
        &FolderTemplate::create_default(),
        temp.path(),
        "Projekt",
        &FsDirectoryCreator,
        &mut prompt,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Io { ref path, .. } if path == &project));
    assert!(project.is_file());
    assert_eq!(fs::read_to_string(&project).unwrap(), "důležité");

    // Only directories trigger the replace question
    assert!(output_of(prompt).is_empty());
}
