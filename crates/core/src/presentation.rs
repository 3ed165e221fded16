//! Icon and colour hints for categories.
//!
//! Kept apart from the entities so stored data carries no display state.

use serde::Serialize;

use crate::expenses::ExpenseCategory;
use crate::goals::GoalCategory;
use crate::portfolio::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl CategoryStyle {
    const fn new(icon: &'static str, color: &'static str) -> Self {
        Self { icon, color }
    }
}

pub trait Styled {
    fn style(&self) -> CategoryStyle;
}

pub fn category_style<T: Styled + ?Sized>(value: &T) -> CategoryStyle {
    value.style()
}

impl Styled for GoalCategory {
    fn style(&self) -> CategoryStyle {
        match self {
            GoalCategory::Vehicle => CategoryStyle::new("car", "primary"),
            GoalCategory::Home => CategoryStyle::new("home", "primary"),
            GoalCategory::Travel => CategoryStyle::new("plane", "primary"),
            GoalCategory::Education => CategoryStyle::new("graduation-cap", "primary"),
            GoalCategory::Health => CategoryStyle::new("heart", "primary"),
            _ => CategoryStyle::new("target", "primary"),
        }
    }
}

impl Styled for ExpenseCategory {
    fn style(&self) -> CategoryStyle {
        match self {
            ExpenseCategory::FoodAndDining => CategoryStyle::new("utensils", "orange"),
            ExpenseCategory::Transportation => CategoryStyle::new("car", "blue"),
            ExpenseCategory::Entertainment => CategoryStyle::new("film", "purple"),
            ExpenseCategory::Utilities => CategoryStyle::new("zap", "yellow"),
            ExpenseCategory::Healthcare => CategoryStyle::new("heart-pulse", "red"),
            ExpenseCategory::Shopping => CategoryStyle::new("shopping-bag", "pink"),
            ExpenseCategory::Education => CategoryStyle::new("book-open", "green"),
            ExpenseCategory::Others => CategoryStyle::new("receipt", "muted-foreground"),
        }
    }
}

impl Styled for RiskLevel {
    fn style(&self) -> CategoryStyle {
        match self {
            RiskLevel::High => CategoryStyle::new("trending-up", "destructive"),
            RiskLevel::Medium => CategoryStyle::new("activity", "yellow-600"),
            RiskLevel::Low => CategoryStyle::new("shield", "secondary"),
        }
    }
}
