//! Dropdown option records.

use crate::model::category::Category;
use crate::model::project::Project;
use crate::model::user::User;
use serde::{Deserialize, Serialize};

/// One selectable entry: stable id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

pub fn user_options(users: &[User]) -> Vec<SelectOption> {
    users
        .iter()
        .map(|user| SelectOption::new(user.id.to_string(), user.name.clone()))
        .collect()
}

pub fn project_options(projects: &[Project]) -> Vec<SelectOption> {
    projects
        .iter()
        .map(|project| SelectOption::new(project.id.to_string(), project.name.clone()))
        .collect()
}

/// Options for every value of a category, e.g. task status or priority.
pub fn category_options<C: Category>() -> Vec<SelectOption> {
    C::ALL
        .iter()
        .map(|value| SelectOption::new(value.as_str(), value.label()))
        .collect()
}

pub fn find_option<'a>(options: &'a [SelectOption], id: &str) -> Option<&'a SelectOption> {
    options.iter().find(|option| option.id == id)
}
