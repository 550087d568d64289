//! React entry point, root component, and HTML page

use super::html::{html_shell, TEMPLATE_MARKER};

/// `id` of the element React mounts into
pub const ROOT_ELEMENT_ID: &str = "root";

/// Generated React sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactFiles {
    /// `src/index.tsx`
    pub index: String,
    /// `src/components/App.tsx`
    pub app: String,
    /// `public/index.html`
    pub html: String,
}

const APP_SOURCE: &str = r#"import React from "react";

const App: React.FC = () => {
  return <div className="app">Hello, World!</div>;
};

export default App;
"#;

fn index_source() -> String {
    format!(
        r#"import React from "react";
import ReactDOM from "react-dom/client";
import "./index.css";
import App from "./components/App";

const root = ReactDOM.createRoot(
  document.getElementById("{ROOT_ELEMENT_ID}") as HTMLElement
);

root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#
    )
}

fn index_html(project_name: &str) -> String {
    let mount = format!(
        "<noscript>Please enable JavaScript to use this app.</noscript>\n  <div id=\"{}\"></div>",
        ROOT_ELEMENT_ID
    );
    html_shell(project_name).replacen(TEMPLATE_MARKER, &mount, 1)
}

/// Generate the React sources for a project
pub fn react_files(project_name: &str) -> ReactFiles {
    ReactFiles {
        index: index_source(),
        app: APP_SOURCE.to_string(),
        html: index_html(project_name),
    }
}
