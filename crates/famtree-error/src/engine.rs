//! Storage engine version skew and environment failures.
//!
//! Engine versions arrive as whatever the database layer reports (often a version tuple); they
//! are kept in their display form.

use crate::template::{Render, Template, Templated, templated_error};
use crate::translate::Translator;

/// The tree was written by a newer storage engine than the one in use, and cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDowngrade {
    env_version: String,
    engine_version: String,
}

/// The tree was written by a newer storage engine, but only by a point release.
///
/// Opening may work; the rendered text asks for a backup first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDowngradeRequired {
    env_version: String,
    engine_version: String,
}

/// The tree was written by an older storage engine and must be upgraded before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineUpgradeRequired {
    env_version: String,
    engine_version: String,
}

macro_rules! engine_versions {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                /// `env_version` is the engine version found on disk, `engine_version` the one
                /// this build links against.
                pub fn new(
                    env_version: impl std::fmt::Display,
                    engine_version: impl std::fmt::Display,
                ) -> Self {
                    Self {
                        env_version: env_version.to_string(),
                        engine_version: engine_version.to_string(),
                    }
                }

                pub fn env_version(&self) -> &str {
                    &self.env_version
                }

                pub fn engine_version(&self) -> &str {
                    &self.engine_version
                }
            }
        )+
    };
}

engine_versions!(EngineDowngrade, EngineDowngradeRequired, EngineUpgradeRequired);

impl Templated for EngineDowngrade {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The Family Tree you are trying to load is in the Bsddb version {env_version} ",
            "format. This version of Gramps uses Bsddb version {bdb_version}. So you are ",
            "trying to load data created in a newer format into an older program, and this ",
            "is bound to fail.\n\n",
            "You should start your <b>newer</b> version of Gramps and <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=How_to_make_a_backup",
            "\">make a backup</a> of your Family Tree. You can then import this backup into ",
            "this version of Gramps."
        ),
        &["env_version", "bdb_version"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("env_version", self.env_version.clone()),
            ("bdb_version", self.engine_version.clone()),
        ]
    }
}

impl Templated for EngineDowngradeRequired {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The Family Tree you are trying to load is in the Bsddb version {env_version} ",
            "format. This version of Gramps uses Bsddb version {bdb_version}. So you are ",
            "trying to load data created in a newer format into an older program. In this ",
            "particular case, the difference is very small, so it may work.\n\n",
            "If you have not already made a backup of your Family Tree, then you should ",
            "start your <b>newer</b> version of Gramps and <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=How_to_make_a_backup",
            "\">make a backup</a> of your Family Tree."
        ),
        &["env_version", "bdb_version"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("env_version", self.env_version.clone()),
            ("bdb_version", self.engine_version.clone()),
        ]
    }
}

impl Templated for EngineUpgradeRequired {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The Family Tree you are trying to load is in the Bsddb version {env_version} ",
            "format. This version of Gramps uses Bsddb version {bdb_version}. Therefore you ",
            "cannot load this Family Tree without upgrading the Bsddb version of the Family ",
            "Tree.\n\n",
            "Opening the Family Tree with this version of Gramps might irretrievably ",
            "corrupt your Family Tree. You are strongly advised to backup your Family ",
            "Tree.\n\n",
            "If you have not already made a backup of your Family Tree, then you should ",
            "start your <b>old</b> version of Gramps and <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=How_to_make_a_backup",
            "\">make a backup</a> of your Family Tree."
        ),
        &["env_version", "bdb_version"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("env_version", self.env_version.clone()),
            ("bdb_version", self.engine_version.clone()),
        ]
    }
}

templated_error!(EngineDowngrade, EngineDowngradeRequired, EngineUpgradeRequired);

/// The storage engine's environment could not be opened.
///
/// Renders an explanation followed by a blank line and the engine's own message, which is
/// never translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentError {
    message: String,
}

impl EnvironmentError {
    pub const EXPLANATION: Template = Template::new(
        concat!(
            "Gramps has detected a problem in opening the 'environment' of the underlying ",
            "Berkeley database used to store this Family Tree. The most likely cause is that ",
            "the database was created with an old version of the Berkeley database program, ",
            "and you are now using a new version. It is quite likely that your database has ",
            "not been changed by Gramps.\n",
            "If possible, you should revert to your old version of Gramps and its support ",
            "software; export your database to XML; close the database; then upgrade again ",
            "to this version of Gramps and import the XML file in an empty Family Tree. ",
            "Alternatively, it may be possible to use the Berkeley database recovery tools."
        ),
        &[],
    );

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Render for EnvironmentError {
    fn render(&self, translator: &dyn Translator) -> String {
        let mut text = Self::EXPLANATION.format(translator, &[]);
        text.push_str("\n\n");
        text.push_str(&self.message);
        text
    }
}

impl std::fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_default())
    }
}

impl std::error::Error for EnvironmentError {}
