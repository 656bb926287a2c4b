#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        use_global_in_initializer in variable is OK
        "var a = \"value\";
        var b = a;
        print b;";
        "value"
    }

    tests! {
        shadow_and_use_local in variable is OK
        "var a = 1;
        {
          var a = 2;
          print a;
        }
        print a;";
        "2"
        "1"
    }

    tests! {
        redefine_global in variable is OK
        "var a = 1;
        var a = 2;
        print a;";
        "2"
    }

    tests! {
        use_local_in_own_initializer in variable is ERR
        "var a = \"outer\";
        {
          var a = a;
        }";
        "[Line 3] error at 'a': Can't read local variable in its own initializer."
    }

    tests! {
        duplicate_local in variable is ERR
        "fun bad() {
          var a = \"first\";
          var a = \"second\";
        }";
        "[Line 3] error at 'a': A variable is already defined with name 'a' in this scope"
    }

    tests! {
        undefined_global in variable is ERR
        "print notDefined;";
        "Undefined variable 'notDefined'."
        "[line 1]"
    }
}
