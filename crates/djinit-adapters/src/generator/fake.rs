//! Fake generator for testing.
//!
//! Reproduces the directory tree `django-admin startproject` would leave
//! behind, written through the in-memory filesystem so end-to-end tests
//! can run the full assembler without Django installed.

use std::path::Path;

use djinit_core::{
    application::{ApplicationError, ports::{Filesystem, ProjectGenerator}},
    error::DjinitResult,
};

use crate::filesystem::MemoryFilesystem;

/// Test generator writing stock framework files into a [`MemoryFilesystem`].
#[derive(Debug, Clone)]
pub struct FakeGenerator {
    filesystem: MemoryFilesystem,
    fail_spawn: bool,
}

impl FakeGenerator {
    pub fn new(filesystem: MemoryFilesystem) -> Self {
        Self {
            filesystem,
            fail_spawn: false,
        }
    }

    /// A generator that fails to spawn, for exercising the assembler's
    /// continue-past-generator-failure behavior.
    pub fn failing(filesystem: MemoryFilesystem) -> Self {
        Self {
            filesystem,
            fail_spawn: true,
        }
    }
}

impl ProjectGenerator for FakeGenerator {
    fn start_project(&self, slug: &str, backend_dir: &Path) -> DjinitResult<()> {
        if self.fail_spawn {
            return Err(ApplicationError::GeneratorSpawn {
                command: format!("fake-generator startproject {slug}"),
                reason: "configured to fail".into(),
            }
            .into());
        }

        let package = backend_dir.join(slug);
        if self.filesystem.exists(&package.join("settings.py")) {
            // django-admin refuses to scaffold over an existing project;
            // mirror that by leaving the tree untouched.
            return Ok(());
        }
        self.filesystem.create_dir_all(&package)?;
        self.filesystem
            .write_file(&backend_dir.join("manage.py"), &stock_manage(slug))?;
        self.filesystem
            .write_file(&package.join("settings.py"), &stock_settings(slug))?;
        self.filesystem
            .write_file(&package.join("wsgi.py"), &stock_wsgi(slug))?;
        self.filesystem
            .write_file(&package.join("asgi.py"), &stock_asgi(slug))?;
        Ok(())
    }
}

fn stock_manage(slug: &str) -> String {
    format!(
        r#"#!/usr/bin/env python
import os
import sys


def main():
    os.environ.setdefault('DJANGO_SETTINGS_MODULE', '{slug}.settings')
    from django.core.management import execute_from_command_line
    execute_from_command_line(sys.argv)


if __name__ == '__main__':
    main()
"#
    )
}

fn stock_settings(slug: &str) -> String {
    format!(
        r#""""
Django settings for {slug} project.
"""

from pathlib import Path

BASE_DIR = Path(__file__).resolve().parent.parent

SECRET_KEY = 'django-insecure-test-only'

DEBUG = True

ALLOWED_HOSTS = []

INSTALLED_APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
    'django.contrib.contenttypes',
    'django.contrib.sessions',
    'django.contrib.messages',
    'django.contrib.staticfiles',
]

MIDDLEWARE = [
    'django.middleware.security.SecurityMiddleware',
    'django.contrib.sessions.middleware.SessionMiddleware',
    'django.middleware.common.CommonMiddleware',
]

ROOT_URLCONF = '{slug}.urls'

WSGI_APPLICATION = '{slug}.wsgi.application'

DATABASES = {{
    'default': {{
        'ENGINE': 'django.db.backends.sqlite3',
        'NAME': BASE_DIR / 'db.sqlite3',
    }}
}}

LANGUAGE_CODE = 'en-us'

TIME_ZONE = 'UTC'

USE_I18N = True

USE_TZ = True

STATIC_URL = 'static/'

DEFAULT_AUTO_FIELD = 'django.db.models.BigAutoField'
"#
    )
}

fn stock_wsgi(slug: &str) -> String {
    format!(
        r#""""
WSGI config for {slug} project.
"""

import os

from django.core.wsgi import get_wsgi_application

os.environ.setdefault('DJANGO_SETTINGS_MODULE', '{slug}.settings')

application = get_wsgi_application()
"#
    )
}

fn stock_asgi(slug: &str) -> String {
    format!(
        r#""""
ASGI config for {slug} project.
"""

import os

from django.core.asgi import get_asgi_application

os.environ.setdefault('DJANGO_SETTINGS_MODULE', '{slug}.settings')

application = get_asgi_application()
"#
    )
}
