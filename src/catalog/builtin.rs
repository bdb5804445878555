// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in cheat sheet content: IL2CPP/BNM from C++ and Unity from C#.

use super::Catalog;
use crate::types::Entry;

pub(super) fn catalog() -> Catalog {
    Catalog::builder()
        // C++
        .entry(
            "C++",
            "Domain & Threads",
            "il2cpp_domain_get",
            Entry::new(
                "Gets the active IL2CPP domain",
                "Entry point for all metadata access.",
                "Il2CppDomain* domain = il2cpp_domain_get();",
            ),
        )
        .entry(
            "C++",
            "Domain & Threads",
            "il2cpp_domain_get_assemblies",
            Entry::new(
                "Enumerates loaded assemblies",
                "Used to locate Assembly-CSharp.",
                "auto assemblies =\n    il2cpp_domain_get_assemblies(domain, &size);",
            ),
        )
        .entry(
            "C++",
            "Domain & Threads",
            "il2cpp_thread_attach",
            Entry::new(
                "Attach native thread to IL2CPP",
                "Required before calling IL2CPP APIs.",
                "il2cpp_thread_attach(domain);",
            ),
        )
        .entry(
            "C++",
            "Assembly & Image",
            "il2cpp_assembly_get_image",
            Entry::new(
                "Assembly → Image",
                "Required before resolving classes.",
                "Il2CppImage* image =\n    il2cpp_assembly_get_image(assembly);",
            ),
        )
        .entry(
            "C++",
            "Assembly & Image",
            "BNM::Image",
            Entry::new(
                "BNM image wrapper",
                "Resolves IL2CPP image by name.",
                "BNM::Image image(\"Assembly-CSharp\");",
            ),
        )
        .entry(
            "C++",
            "Class Metadata",
            "il2cpp_class_from_name",
            Entry::new(
                "Resolve class by name",
                "Primary class resolver.",
                "il2cpp_class_from_name(img,\"NS\",\"Class\");",
            ),
        )
        .entry(
            "C++",
            "Class Metadata",
            "il2cpp_class_get_methods",
            Entry::new(
                "Enumerate class methods",
                "Used for invoke or hooking.",
                "il2cpp_class_get_methods(klass, &iter);",
            ),
        )
        // C#
        .entry(
            "C#",
            "Unity Lifecycle",
            "Update",
            Entry::new(
                "Runs every frame",
                "Used for input and logic.",
                "void Update() { }",
            ),
        )
        .entry(
            "C#",
            "Unity Lifecycle",
            "FixedUpdate",
            Entry::new(
                "Physics tick",
                "Used for Rigidbody logic.",
                "void FixedUpdate() { }",
            ),
        )
        .entry(
            "C#",
            "Input & Time",
            "Input.GetKey",
            Entry::new(
                "Checks if a key is held",
                "Used for continuous input.",
                "Input.GetKey(KeyCode.Space);",
            ),
        )
        .entry(
            "C#",
            "Input & Time",
            "Time.deltaTime",
            Entry::new(
                "Frame delta time",
                "Used for smooth movement.",
                "speed * Time.deltaTime;",
            ),
        )
        .build()
}
