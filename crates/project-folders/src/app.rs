//! Interactive menu for editing the template and creating projects

use folder_template::prelude::*;
use log::{error, info};
use std::io;
use std::path::PathBuf;

const BANNER: &str = "GreenTech Solutions - Systém pro vytváření projektových složek\n\
===========================================================";

const MAIN_MENU: &str = "\nVyberte akci:\n\
1 - Vytvořit složky pro nový projekt\n\
2 - Upravit šablonu složek\n\
3 - Zobrazit aktuální šablonu\n\
0 - Ukončit aplikaci";

const EDIT_MENU: &str = "\nÚprava šablony:\n\
1 - Přidat hlavní složku\n\
2 - Přidat podsložku\n\
3 - Odstranit složku\n\
0 - Zpět do hlavního menu";

const INVALID_CHOICE: &str = "Neplatná volba. Zkuste to znovu.";
const INVALID_INDEX: &str = "Neplatný index složky.";
const EMPTY_FOLDER_NAME: &str = "Název složky nemůže být prázdný.";

/// One interactive session over a template
///
/// Menu failures (bad numbers, folder errors) are reported to the user and the
/// session continues. Only a failing prompt ends [`App::run`] with an error.
pub struct App<P, F> {
    template: FolderTemplate,
    prompt: P,
    fs: F,
    base_dir: PathBuf,
}

impl<P: Prompt, F: ProjectFs> App<P, F> {
    pub fn new(template: FolderTemplate, prompt: P, fs: F, base_dir: PathBuf) -> Self {
        Self {
            template,
            prompt,
            fs,
            base_dir,
        }
    }

    pub fn template(&self) -> &FolderTemplate {
        &self.template
    }

    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.prompt.say(BANNER)?;

        while let Some(choice) = self.prompt.ask(MAIN_MENU)? {
            match choice.trim() {
                "1" => self.create_project()?,
                "2" => self.edit_template()?,
                "3" => self.display_template()?,
                "0" => break,
                _ => self.prompt.say(INVALID_CHOICE)?,
            }
        }

        info!("Session finished");
        Ok(())
    }

    fn create_project(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt.ask("\nZadejte název nového projektu:")? else {
            return Ok(());
        };
        if name.trim().is_empty() {
            return self.prompt.say("Název projektu nemůže být prázdný.");
        }

        let Some(location) = self
            .prompt
            .ask("\nZadejte cestu, kde se má projekt vytvořit (prázdné pro aktuální adresář):")?
        else {
            return Ok(());
        };
        let base_dir = match location.trim() {
            "" => self.base_dir.clone(),
            location => PathBuf::from(location),
        };

        let outcome = create_project(
            &self.template,
            &base_dir,
            &name,
            &self.fs,
            &mut self.prompt,
        );

        match outcome {
            Ok(ProjectOutcome::Created { path, folders }) => {
                self.prompt.say(&format!(
                    "Vytvořena hlavní složka projektu: {}",
                    path.display()
                ))?;
                for folder in &folders {
                    self.prompt
                        .say(&format!("Vytvořena složka: {}", folder.display()))?;
                }
                self.prompt.say(&format!(
                    "Projekt '{}' byl úspěšně vytvořen na cestě: {}",
                    name,
                    path.display()
                ))
            }
            Ok(ProjectOutcome::Cancelled) => self.prompt.say("Vytváření projektu zrušeno."),
            Err(Error::Prompt(err)) => Err(err),
            Err(err) => {
                if let Error::Io { created, .. } = &err {
                    for folder in created {
                        self.prompt
                            .say(&format!("Vytvořena složka: {}", folder.display()))?;
                    }
                }

                error!("Project creation failed: {}", err);
                self.prompt
                    .say(&format!("Chyba při vytváření projektu: {}", err))
            }
        }
    }

    fn edit_template(&mut self) -> io::Result<()> {
        while let Some(choice) = self.prompt.ask(EDIT_MENU)? {
            match choice.trim() {
                "1" => self.add_root_folder()?,
                "2" => self.add_subfolder()?,
                "3" => self.remove_folder()?,
                "0" => break,
                _ => self.prompt.say(INVALID_CHOICE)?,
            }
        }
        Ok(())
    }

    fn add_root_folder(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt.ask("Zadejte název nové hlavní složky:")? else {
            return Ok(());
        };

        if name.trim().is_empty() {
            self.prompt.say(EMPTY_FOLDER_NAME)
        } else if self.template.add_root(&name) {
            self.prompt
                .say(&format!("Hlavní složka '{}' byla přidána do šablony.", name))
        } else {
            self.prompt
                .say(&format!("Složka s názvem '{}' již existuje.", name))
        }
    }

    fn add_subfolder(&mut self) -> io::Result<()> {
        self.display_template()?;

        let Some(answer) = self.prompt.ask("\nZadejte číslo nadřazené složky:")? else {
            return Ok(());
        };
        let Some(index) = self.root_index(&answer) else {
            return self.prompt.say(INVALID_INDEX);
        };
        let parent = self.template.roots()[index].name().to_string();

        self.prompt
            .say(&format!("Přidávání podsložky do '{}'", parent))?;
        let Some(name) = self.prompt.ask("Zadejte název nové podsložky:")? else {
            return Ok(());
        };
        if name.trim().is_empty() {
            return self.prompt.say(EMPTY_FOLDER_NAME);
        }

        match self.template.add_child_to_root(index, &name) {
            Ok(true) => self.prompt.say(&format!(
                "Podsložka '{}' byla přidána do '{}'.",
                name, parent
            )),
            Ok(false) => self.prompt.say(&format!(
                "Podsložka s názvem '{}' již existuje v '{}'.",
                name, parent
            )),
            Err(err) => {
                error!("Adding subfolder failed: {}", err);
                self.prompt.say(INVALID_INDEX)
            }
        }
    }

    fn remove_folder(&mut self) -> io::Result<()> {
        self.display_template()?;

        let Some(answer) = self
            .prompt
            .ask("\nZadejte číslo složky, kterou chcete odstranit:")?
        else {
            return Ok(());
        };
        let Some(index) = parse_number(&answer) else {
            return self.prompt.say(INVALID_INDEX);
        };

        match self.template.remove_root_at(index) {
            Ok(removed) => self.prompt.say(&format!(
                "Složka '{}' byla odstraněna ze šablony.",
                removed.name()
            )),
            Err(err) => {
                info!("Not removing folder: {}", err);
                self.prompt.say(INVALID_INDEX)
            }
        }
    }

    fn display_template(&mut self) -> io::Result<()> {
        self.prompt.say("\nAktuální struktura šablony:")?;
        let listing = self.template.listing().to_string();
        self.prompt.say(listing.trim_end())
    }

    /// Resolve a 1-based root folder number to an existing 0-based index
    fn root_index(&self, answer: &str) -> Option<usize> {
        parse_number(answer).filter(|&index| index < self.template.root_count())
    }
}

/// Parse a 1-based folder number as typed by the user into a 0-based index
fn parse_number(answer: &str) -> Option<usize> {
    answer.trim().parse::<usize>().ok()?.checked_sub(1)
}
