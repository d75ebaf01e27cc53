//! Reusable project layouts and configs.

#![allow(dead_code)]

/// Files of a small full-stack project
pub const SHOP_FILES: &[&str] = &[
    "backend/api/main.py",
    "backend/api/utils.py",
    "backend/models/user.py",
    "frontend/components/Button.tsx",
    "frontend/pages/index.tsx",
    "node_modules/react/index.js",
    "README.md",
];

pub const SHOP_CONFIG: &str = "\
project_title: shop
tree_focus:
  - backend/api
  - web: frontend/
";
