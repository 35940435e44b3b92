use crate::tree::Directory;

/// Name of the folder, relative to the working directory, that receives the project skeleton.
pub const BASE_DIRECTORY: &str = "project_framework";

/// Three files per UI component: the component itself, its tests and its stories.
fn component(name: &str) -> Directory {
    Directory::new()
        .with_empty_file(format!("{name}.tsx"))
        .with_empty_file(format!("{name}.test.tsx"))
        .with_empty_file(format!("{name}.stories.tsx"))
}

/// The React front-end skeleton: static assets, application sources and Storybook config.
///
/// Every file is created empty.
pub fn project_structure() -> Directory {
    let public = Directory::new()
        .with_empty_file("index.html")
        .with_empty_file("favicon.ico")
        .with_dir(
            "assets",
            Directory::new()
                .with_dir("images", Directory::new())
                .with_dir("fonts", Directory::new()),
        );

    let components = Directory::new()
        .with_dir("Button", component("Button"))
        .with_dir("Modal", component("Modal"))
        .with_dir("Navbar", component("Navbar"));

    let features = Directory::new()
        .with_dir(
            "auth",
            Directory::new()
                .with_empty_file("authSlice.ts")
                .with_empty_file("Login.tsx")
                .with_empty_file("Signup.tsx"),
        )
        .with_dir(
            "dashboard",
            Directory::new()
                .with_empty_file("Dashboard.tsx")
                .with_empty_file("Dashboard.test.tsx")
                .with_dir(
                    "widgets",
                    Directory::new()
                        .with_empty_file("Widget1.tsx")
                        .with_empty_file("Widget2.tsx"),
                ),
        );

    let src = Directory::new()
        .with_empty_file("App.tsx")
        .with_empty_file("index.tsx")
        .with_dir("components", components)
        .with_dir("features", features)
        .with_dir(
            "redux",
            Directory::new()
                .with_empty_file("store.ts")
                .with_empty_file("middleware.ts"),
        )
        .with_dir(
            "services",
            Directory::new()
                .with_empty_file("api.ts")
                .with_empty_file("mockData.ts"),
        )
        .with_dir(
            "styles",
            Directory::new().with_empty_file("global.css").with_dir(
                "themes",
                Directory::new()
                    .with_empty_file("dark.css")
                    .with_empty_file("light.css"),
            ),
        )
        .with_dir(
            "tests",
            Directory::new()
                .with_dir(
                    "utils",
                    Directory::new()
                        .with_empty_file("renderWithRedux.tsx")
                        .with_empty_file("mockServer.ts"),
                )
                .with_empty_file("setupTests.ts"),
        );

    let storybook = Directory::new()
        .with_empty_file("main.js")
        .with_empty_file("preview.js")
        .with_dir(
            "stories",
            Directory::new()
                .with_empty_file("Button.stories.tsx")
                .with_empty_file("Modal.stories.tsx")
                .with_empty_file("Navbar.stories.tsx"),
        );

    Directory::new().with_dir(
        "scripts",
        Directory::new()
            .with_dir("public", public)
            .with_dir("src", src)
            .with_dir(".storybook", storybook),
    )
}
