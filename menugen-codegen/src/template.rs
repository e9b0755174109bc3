//! Host-language templates for the generated menu source.
//!
//! A template owns every piece of target syntax. The [`Emitter`](crate::Emitter)
//! decides what goes into the file and in which order; the template decides
//! how each piece is spelled.

use crate::builder::{CodeBuilder, Indent};

/// Everything a template needs to render one menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub ordinal: usize,
    /// Display path, e.g. `Assets/Create/Sword`.
    pub menu_path: String,
    pub priority: i64,
    /// Type reference as written in source.
    pub type_name: String,
    /// Identity shown in the entry's comment.
    pub qualified_name: String,
}

/// The host calls the shared creation helper relies on.
///
/// The helper resolves the selected folder, creates the asset at a
/// placeholder path inside it, then refreshes and saves, in that order.
#[derive(Debug, Clone, Copy)]
pub struct HostApi {
    /// Base type of every created instance.
    pub instance_type: &'static str,
    /// Attribute registering a menu item.
    pub menu_attribute: &'static str,
    /// Factory constructing an instance from a type.
    pub create_instance: &'static str,
    /// Expression yielding the folder of the active selection.
    pub selection_path: &'static str,
    pub create_asset: &'static str,
    pub refresh: &'static str,
    pub save: &'static str,
}

/// Target syntax for the generated file.
pub trait HostTemplate {
    /// Template name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Indentation used throughout the file.
    fn indent(&self) -> Indent;

    /// Root of every menu path.
    fn menu_root(&self) -> &'static str {
        "Assets/Create/"
    }

    /// The "auto-generated, do not edit" banner.
    fn banner(&self, b: CodeBuilder) -> CodeBuilder;

    /// Opens the guard, namespace and container; leaves `b` indented for members.
    fn header(&self, b: CodeBuilder) -> CodeBuilder;

    /// One generation routine for `entry`.
    fn entry(&self, b: CodeBuilder, entry: &MenuEntry) -> CodeBuilder;

    /// The creation helper every routine delegates to.
    fn helper(&self, b: CodeBuilder) -> CodeBuilder;

    /// Closes what [`header`](Self::header) opened.
    fn footer(&self, b: CodeBuilder) -> CodeBuilder;
}

/// Unity editor script in C#.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnityCSharp;

/// Shared instance of the Unity template.
pub const UNITY_CSHARP: UnityCSharp = UnityCSharp;

const UNITY_API: HostApi = HostApi {
    instance_type: "UnityEngine.ScriptableObject",
    menu_attribute: "UnityEditor.MenuItem",
    create_instance: "UnityEngine.ScriptableObject.CreateInstance",
    selection_path: "UnityEditor.AssetDatabase.GetAssetPath(UnityEditor.Selection.activeObject)",
    create_asset: "UnityEditor.ProjectWindowUtil.CreateAsset",
    refresh: "UnityEditor.AssetDatabase.Refresh",
    save: "UnityEditor.AssetDatabase.SaveAssets",
};

const BANNER: &[&str] = &[
    "//------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//     This code was generated by menugen.",
    "//     Changes to this file will be lost when the code is regenerated.",
    "// </auto-generated>",
    "//------------------------------------------------------------------------------",
];
const GUARD_OPEN: &str = "#if UNITY_EDITOR";
const GUARD_CLOSE: &str = "#endif";
const NAMESPACE: &str = "namespace Menugen._AutoGenerated";
const CONTAINER: &str = "internal class __CreateItemMenuMethods";
const ROUTINE_PREFIX: &str = "_Generate";
const HELPER: &str = "_CreateAsset";
const PLACEHOLDER_FILE: &str = "New Asset.asset";

impl UnityCSharp {
    pub fn api(&self) -> &'static HostApi {
        &UNITY_API
    }
}

impl HostTemplate for UnityCSharp {
    fn name(&self) -> &'static str {
        "unity-csharp"
    }

    fn indent(&self) -> Indent {
        Indent::CSHARP
    }

    fn banner(&self, b: CodeBuilder) -> CodeBuilder {
        b.lines(BANNER.iter().copied()).blank()
    }

    fn header(&self, b: CodeBuilder) -> CodeBuilder {
        b.line(GUARD_OPEN)
            .blank()
            .line(NAMESPACE)
            .line("{")
            .indent()
            .line(CONTAINER)
            .line("{")
            .indent()
    }

    fn entry(&self, b: CodeBuilder, entry: &MenuEntry) -> CodeBuilder {
        let api = self.api();
        b.comment(
            "//",
            &format!("Menu item for '{}'", single_line(&entry.qualified_name)),
        )
        .line(&format!(
            "[{}(\"{}\", priority = {})]",
            api.menu_attribute,
            escape_string(&entry.menu_path),
            entry.priority
        ))
        .line(&format!(
            "private static void {}{}()",
            ROUTINE_PREFIX, entry.ordinal
        ))
        .block("{", "}", |b| {
            b.line(&format!(
                "var item = {}(typeof({}));",
                api.create_instance, entry.type_name
            ))
            .line(&format!("{}(item);", HELPER))
        })
    }

    fn helper(&self, b: CodeBuilder) -> CodeBuilder {
        let api = self.api();
        b.comment("//", "Utility method for creating asset instances")
            .line(&format!(
                "private static void {}({} instance)",
                HELPER, api.instance_type
            ))
            .block("{", "}", |b| {
                b.line(&format!("var path = {};", api.selection_path))
                    .line(&format!(
                        "var assetPath = path + \"/{}\";",
                        escape_string(PLACEHOLDER_FILE)
                    ))
                    .line(&format!("{}(instance, assetPath);", api.create_asset))
                    .line(&format!("{}();", api.refresh))
                    .line(&format!("{}();", api.save))
            })
    }

    fn footer(&self, b: CodeBuilder) -> CodeBuilder {
        b.dedent().line("}").dedent().line("}").line(GUARD_CLOSE)
    }
}

/// Escape text for use inside a C# regular string literal.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out
}

/// Replace line breaks so `s` fits in a single-line comment.
fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}
