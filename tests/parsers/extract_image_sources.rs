//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use imgtag::parsers::img::extract_image_sources;

    #[test]
    fn document_order() {
        let html = r#"<p>x</p><img alt="a" src="one.png"><img src="two.png" class="b">"#;

        assert_eq!(extract_image_sources(html), vec!["one.png", "two.png"]);
    }

    #[test]
    fn duplicates_preserved() {
        let html = r#"<img src="a.png"><img src="b.png"><img src="a.png">"#;

        assert_eq!(extract_image_sources(html), vec!["a.png", "b.png", "a.png"]);
    }

    #[test]
    fn data_uri_source() {
        let html = r#"<div><img class="x" src="data:image/png;base64,AAAA" /></div>"#;

        assert_eq!(
            extract_image_sources(html),
            vec!["data:image/png;base64,AAAA"]
        );
    }

    #[test]
    fn multiline_tag() {
        let html = "<img\n  alt=\"a\"\n  src=\"/u/a.png\"\n>";

        assert_eq!(extract_image_sources(html), vec!["/u/a.png"]);
    }

    #[test]
    fn from_option() {
        let html: Option<&str> = Some(r#"<img src="x.png">"#);

        assert_eq!(extract_image_sources(html), vec!["x.png"]);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use imgtag::parsers::img::extract_image_sources;

    #[test]
    fn empty() {
        assert!(extract_image_sources("").is_empty());
    }

    #[test]
    fn absent() {
        assert!(extract_image_sources(None::<&str>).is_empty());
    }

    #[test]
    fn no_img_tags() {
        assert!(extract_image_sources(r#"<p><a href="a.png">a</a></p>"#).is_empty());
    }

    #[test]
    fn single_quoted_attribute() {
        assert!(extract_image_sources("<img src='a.png'>").is_empty());
    }

    #[test]
    fn unquoted_attribute() {
        assert!(extract_image_sources("<img src=a.png>").is_empty());
    }

    #[test]
    fn empty_src_value() {
        assert!(extract_image_sources(r#"<img src="">"#).is_empty());
    }

    #[test]
    fn no_whitespace_before_src() {
        // `<img` 和 `src` 之间至少需要一个字符
        assert!(extract_image_sources(r#"<imgsrc="a.png">"#).is_empty());
    }

    #[test]
    fn unclosed_tag() {
        assert!(extract_image_sources(r#"<img src="a.png""#).is_empty());
    }
}
