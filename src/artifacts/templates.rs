//! Static content of the generated files.

/// Hook-manager configuration.
pub const HOOK_CONFIG: &str = r#"# Generated by toolprep. Edit freely; toolprep never overwrites this file.
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.4.0
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
      - id: check-merge-conflict
      - id: check-yaml
      - id: check-added-large-files
      - id: check-case-conflict

  - repo: https://github.com/psf/black
    rev: 23.1.0
    hooks:
      - id: black
        language_version: python3

  - repo: https://github.com/pycqa/isort
    rev: 5.12.0
    hooks:
      - id: isort

  - repo: https://github.com/pycqa/flake8
    rev: 6.0.0
    hooks:
      - id: flake8

  - repo: local
    hooks:
      - id: clang-format
        name: clang-format
        entry: clang-format
        language: system
        files: \.(c|h|cpp|hpp)$
        args: [--style=file, -i]

      - id: cmake-format
        name: cmake-format
        entry: cmake-format
        language: system
        files: CMakeLists\.txt$|.*\.cmake$
        args: [--in-place]
"#;

/// Script that configures the build and runs every quality check.
pub const CHECK_SCRIPT: &str = r#"#!/bin/bash
# Generated by toolprep: run all code quality checks.

set -e

echo "Running code quality checks..."

mkdir -p build
cd build

cmake -DENABLE_STATIC_ANALYSIS=ON -DENABLE_FORMAT_CHECK=ON ..

echo "Running all quality checks..."
make check-all

echo "All quality checks passed!"
"#;

/// Script that configures the build and runs every auto-fixer.
pub const FIX_SCRIPT: &str = r#"#!/bin/bash
# Generated by toolprep: auto-fix code quality issues.

set -e

echo "Auto-fixing code quality issues..."

mkdir -p build
cd build

cmake -DENABLE_STATIC_ANALYSIS=ON -DENABLE_FORMAT_CHECK=ON ..

echo "Running auto-fixers..."
make fix-all

echo "Auto-fix completed!"
echo "Please review the changes and run scripts/check-quality.sh to verify."
"#;
