//! Known tag names and standard attribute names
//!
//! Attribute normalization only happens on elements whose lowercased tag name
//! is a known HTML or SVG tag. The lookup key is always the lowercased
//! attribute name, so `CLASSNAME`, `classname` and `class` all resolve to
//! `className`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

// ═══════════════════════════════════════════════════════════════════════
// Tags
// ═══════════════════════════════════════════════════════════════════════

const HTML_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins",
    "kbd", "label", "legend", "li", "link", "main", "map", "mark", "math", "menu", "menuitem",
    "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option", "output", "p",
    "param", "picture", "pre", "progress", "q", "rb", "rp", "rt", "rtc", "ruby", "s", "samp",
    "script", "search", "section", "select", "slot", "small", "source", "span", "strong",
    "style", "sub", "summary", "sup", "table", "tbody", "td", "template", "textarea", "tfoot",
    "th", "thead", "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

const SVG_TAGS: &[&str] = &[
    "a", "altGlyph", "altGlyphDef", "altGlyphItem", "animate", "animateColor",
    "animateMotion", "animateTransform", "circle", "clipPath", "color-profile", "cursor",
    "defs", "desc", "ellipse", "feBlend", "feColorMatrix", "feComponentTransfer",
    "feComposite", "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap",
    "feDistantLight", "feDropShadow", "feFlood", "feFuncA", "feFuncB", "feFuncG", "feFuncR",
    "feGaussianBlur", "feImage", "feMerge", "feMergeNode", "feMorphology", "feOffset",
    "fePointLight", "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence", "filter",
    "font", "font-face", "font-face-format", "font-face-name", "font-face-src",
    "font-face-uri", "foreignObject", "g", "glyph", "glyphRef", "hkern", "image", "line",
    "linearGradient", "marker", "mask", "metadata", "missing-glyph", "mpath", "path",
    "pattern", "polygon", "polyline", "radialGradient", "rect", "script", "set", "stop",
    "style", "svg", "switch", "symbol", "text", "textPath", "title", "tref", "tspan", "use",
    "view", "vkern",
];

/// Lowercased HTML and SVG tag names.
static KNOWN_TAGS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    HTML_TAGS
        .iter()
        .chain(SVG_TAGS)
        .map(|tag| tag.to_ascii_lowercase())
        .collect()
});

/// Whether `tag` (already lowercased) is a known HTML or SVG tag.
pub fn is_known_tag(tag: &str) -> bool {
    KNOWN_TAGS.contains(tag)
}

// ═══════════════════════════════════════════════════════════════════════
// Attributes
// ═══════════════════════════════════════════════════════════════════════

/// Canonical spellings. Each one is reachable from its own lowercase form.
const STANDARD_NAMES: &[&str] = &[
    // HTML
    "accept", "acceptCharset", "accessKey", "action", "allowFullScreen", "alt", "as",
    "async", "autoCapitalize", "autoComplete", "autoCorrect", "autoFocus", "autoPlay",
    "autoSave", "capture", "cellPadding", "cellSpacing", "challenge", "charSet", "checked",
    "children", "cite", "classID", "className", "cols", "colSpan", "content",
    "contentEditable", "contextMenu", "controls", "controlsList", "coords", "crossOrigin",
    "dangerouslySetInnerHTML", "data", "dateTime", "default", "defaultChecked",
    "defaultValue", "defer", "dir", "disabled", "disablePictureInPicture",
    "disableRemotePlayback", "download", "draggable", "encType", "enterKeyHint", "fetchPriority",
    "form", "formAction", "formEncType", "formMethod", "formNoValidate", "formTarget",
    "frameBorder", "headers", "height", "hidden", "high", "href", "hrefLang", "htmlFor",
    "httpEquiv", "icon", "id", "imageSizes", "imageSrcSet", "inert", "innerHTML", "inputMode",
    "integrity", "is", "itemID", "itemProp", "itemRef", "itemScope", "itemType", "keyParams",
    "keyType", "kind", "label", "lang", "list", "loop", "low", "manifest", "marginHeight",
    "marginWidth", "max", "maxLength", "media", "mediaGroup", "method", "min", "minLength",
    "multiple", "muted", "name", "noModule", "nonce", "noValidate", "open", "optimum",
    "pattern", "placeholder", "playsInline", "popover", "popoverTarget",
    "popoverTargetAction", "poster", "preload", "profile", "radioGroup", "readOnly",
    "referrerPolicy", "rel", "required", "reversed", "role", "rows", "rowSpan", "sandbox",
    "scope", "scoped", "scrolling", "seamless", "selected", "shape", "size", "sizes", "span",
    "spellCheck", "src", "srcDoc", "srcLang", "srcSet", "start", "step", "style", "summary",
    "tabIndex", "target", "title", "type", "useMap", "value", "width", "wmode", "wrap",
    // SVG
    "about", "accentHeight", "accumulate", "additive", "alignmentBaseline", "allowReorder",
    "alphabetic", "amplitude", "arabicForm", "ascent", "attributeName", "attributeType",
    "autoReverse", "azimuth", "baseFrequency", "baselineShift", "baseProfile", "bbox",
    "begin", "bias", "by", "calcMode", "capHeight", "clip", "clipPath", "clipPathUnits",
    "clipRule", "color", "colorInterpolation", "colorInterpolationFilters", "colorProfile",
    "colorRendering", "contentScriptType", "contentStyleType", "cursor", "cx", "cy", "d",
    "datatype", "decelerate", "descent", "diffuseConstant", "direction", "display", "divisor",
    "dominantBaseline", "dur", "dx", "dy", "edgeMode", "elevation", "enableBackground", "end",
    "exponent", "externalResourcesRequired", "fill", "fillOpacity", "fillRule", "filter",
    "filterRes", "filterUnits", "floodColor", "floodOpacity", "focusable", "fontFamily",
    "fontSize", "fontSizeAdjust", "fontStretch", "fontStyle", "fontVariant", "fontWeight",
    "format", "from", "fx", "fy", "g1", "g2", "glyphName", "glyphOrientationHorizontal",
    "glyphOrientationVertical", "glyphRef", "gradientTransform", "gradientUnits", "hanging",
    "horizAdvX", "horizOriginX", "ideographic", "imageRendering", "in", "in2", "inlist",
    "intercept", "k", "k1", "k2", "k3", "k4", "kernelMatrix", "kernelUnitLength", "kerning",
    "keyPoints", "keySplines", "keyTimes", "lengthAdjust", "letterSpacing", "lightingColor",
    "limitingConeAngle", "local", "markerEnd", "markerHeight", "markerMid", "markerStart",
    "markerUnits", "markerWidth", "mask", "maskContentUnits", "maskUnits", "mathematical",
    "mode", "numOctaves", "offset", "opacity", "operator", "order", "orient", "orientation",
    "origin", "overflow", "overlinePosition", "overlineThickness", "paintOrder", "panose1",
    "pathLength", "patternContentUnits", "patternTransform", "patternUnits", "pointerEvents",
    "points", "pointsAtX", "pointsAtY", "pointsAtZ", "prefix", "preserveAlpha",
    "preserveAspectRatio", "primitiveUnits", "property", "r", "radius", "refX", "refY",
    "renderingIntent", "repeatCount", "repeatDur", "requiredExtensions", "requiredFeatures",
    "resource", "restart", "result", "results", "rotate", "rx", "ry", "scale", "security",
    "seed", "shapeRendering", "slope", "spacing", "specularConstant", "specularExponent",
    "speed", "spreadMethod", "startOffset", "stdDeviation", "stemh", "stemv", "stitchTiles",
    "stopColor", "stopOpacity", "strikethroughPosition", "strikethroughThickness", "string",
    "stroke", "strokeDasharray", "strokeDashoffset", "strokeLinecap", "strokeLinejoin",
    "strokeMiterlimit", "strokeOpacity", "strokeWidth", "suppressContentEditableWarning",
    "suppressHydrationWarning", "surfaceScale", "systemLanguage", "tableValues", "targetX",
    "targetY", "textAnchor", "textDecoration", "textLength", "textRendering", "to",
    "transform", "typeof", "u1", "u2", "underlinePosition", "underlineThickness", "unicode",
    "unicodeBidi", "unicodeRange", "unitsPerEm", "unselectable", "vAlphabetic", "values",
    "vectorEffect", "version", "vertAdvY", "vertOriginX", "vertOriginY", "vHanging",
    "vIdeographic", "viewBox", "viewTarget", "visibility", "vMathematical", "vocab", "widths",
    "wordSpacing", "writingMode", "x", "x1", "x2", "xChannelSelector", "xHeight",
    "xlinkActuate", "xlinkArcrole", "xlinkHref", "xlinkRole", "xlinkShow", "xlinkTitle",
    "xlinkType", "xmlBase", "xmlLang", "xmlns", "xmlnsXlink", "xmlSpace", "y", "y1", "y2",
    "yChannelSelector", "z", "zoomAndPan",
    // Events
    "onAbort", "onAnimationEnd", "onAnimationIteration", "onAnimationStart", "onBeforeInput",
    "onBlur", "onCanPlay", "onCanPlayThrough", "onChange", "onClick", "onClose",
    "onCompositionEnd", "onCompositionStart", "onCompositionUpdate", "onContextMenu",
    "onCopy", "onCut", "onDoubleClick", "onDrag", "onDragEnd", "onDragEnter", "onDragExit",
    "onDragLeave", "onDragOver", "onDragStart", "onDrop", "onDurationChange", "onEmptied",
    "onEncrypted", "onEnded", "onError", "onFocus", "onInput", "onInvalid", "onKeyDown",
    "onKeyPress", "onKeyUp", "onLoad", "onLoadedData", "onLoadedMetadata", "onLoadStart",
    "onMouseDown", "onMouseEnter", "onMouseLeave", "onMouseMove", "onMouseOut",
    "onMouseOver", "onMouseUp", "onPaste", "onPause", "onPlay", "onPlaying",
    "onPointerCancel", "onPointerDown", "onPointerEnter", "onPointerLeave", "onPointerMove",
    "onPointerOut", "onPointerOver", "onPointerUp", "onProgress", "onRateChange", "onReset",
    "onResize", "onScroll", "onSeeked", "onSeeking", "onSelect", "onStalled", "onSubmit",
    "onSuspend", "onTimeUpdate", "onToggle", "onTouchCancel", "onTouchEnd", "onTouchMove",
    "onTouchStart", "onTransitionEnd", "onVolumeChange", "onWaiting", "onWheel",
];

/// Spellings whose lowercase form differs from the canonical name's.
const ALIASES: &[(&str, &str)] = &[
    ("class", "className"),
    ("for", "htmlFor"),
    ("accept-charset", "acceptCharset"),
    ("http-equiv", "httpEquiv"),
    ("ondblclick", "onDoubleClick"),
    ("accent-height", "accentHeight"),
    ("alignment-baseline", "alignmentBaseline"),
    ("arabic-form", "arabicForm"),
    ("baseline-shift", "baselineShift"),
    ("cap-height", "capHeight"),
    ("clip-path", "clipPath"),
    ("clip-rule", "clipRule"),
    ("color-interpolation", "colorInterpolation"),
    ("color-interpolation-filters", "colorInterpolationFilters"),
    ("color-profile", "colorProfile"),
    ("color-rendering", "colorRendering"),
    ("dominant-baseline", "dominantBaseline"),
    ("enable-background", "enableBackground"),
    ("fill-opacity", "fillOpacity"),
    ("fill-rule", "fillRule"),
    ("flood-color", "floodColor"),
    ("flood-opacity", "floodOpacity"),
    ("font-family", "fontFamily"),
    ("font-size", "fontSize"),
    ("font-size-adjust", "fontSizeAdjust"),
    ("font-stretch", "fontStretch"),
    ("font-style", "fontStyle"),
    ("font-variant", "fontVariant"),
    ("font-weight", "fontWeight"),
    ("glyph-name", "glyphName"),
    ("glyph-orientation-horizontal", "glyphOrientationHorizontal"),
    ("glyph-orientation-vertical", "glyphOrientationVertical"),
    ("horiz-adv-x", "horizAdvX"),
    ("horiz-origin-x", "horizOriginX"),
    ("image-rendering", "imageRendering"),
    ("letter-spacing", "letterSpacing"),
    ("lighting-color", "lightingColor"),
    ("marker-end", "markerEnd"),
    ("marker-mid", "markerMid"),
    ("marker-start", "markerStart"),
    ("overline-position", "overlinePosition"),
    ("overline-thickness", "overlineThickness"),
    ("paint-order", "paintOrder"),
    ("panose-1", "panose1"),
    ("pointer-events", "pointerEvents"),
    ("rendering-intent", "renderingIntent"),
    ("shape-rendering", "shapeRendering"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("strikethrough-position", "strikethroughPosition"),
    ("strikethrough-thickness", "strikethroughThickness"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-opacity", "strokeOpacity"),
    ("stroke-width", "strokeWidth"),
    ("text-anchor", "textAnchor"),
    ("text-decoration", "textDecoration"),
    ("text-rendering", "textRendering"),
    ("underline-position", "underlinePosition"),
    ("underline-thickness", "underlineThickness"),
    ("unicode-bidi", "unicodeBidi"),
    ("unicode-range", "unicodeRange"),
    ("units-per-em", "unitsPerEm"),
    ("v-alphabetic", "vAlphabetic"),
    ("v-hanging", "vHanging"),
    ("v-ideographic", "vIdeographic"),
    ("v-mathematical", "vMathematical"),
    ("vector-effect", "vectorEffect"),
    ("vert-adv-y", "vertAdvY"),
    ("vert-origin-x", "vertOriginX"),
    ("vert-origin-y", "vertOriginY"),
    ("word-spacing", "wordSpacing"),
    ("writing-mode", "writingMode"),
    ("x-height", "xHeight"),
    ("xlink:actuate", "xlinkActuate"),
    ("xlink:arcrole", "xlinkArcrole"),
    ("xlink:href", "xlinkHref"),
    ("xlink:role", "xlinkRole"),
    ("xlink:show", "xlinkShow"),
    ("xlink:title", "xlinkTitle"),
    ("xlink:type", "xlinkType"),
    ("xml:base", "xmlBase"),
    ("xml:lang", "xmlLang"),
    ("xml:space", "xmlSpace"),
    ("xmlns:xlink", "xmlnsXlink"),
];

/// Lowercased attribute name to canonical name.
static ATTRIBUTE_NAMES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    STANDARD_NAMES
        .iter()
        .map(|name| (name.to_ascii_lowercase(), *name))
        .chain(ALIASES.iter().map(|(alias, name)| (alias.to_string(), *name)))
        .collect()
});

/// Canonical spelling for a lowercased attribute name, if it has one.
pub fn standard_attribute_name(lowercased: &str) -> Option<&'static str> {
    ATTRIBUTE_NAMES.get(lowercased).copied()
}

/// Resolve the output name of attribute `name` on element `tag`.
///
/// Unknown tags and unknown attributes keep `name` exactly as written.
pub fn resolve_attribute_name<'a>(tag: &str, name: &'a str) -> &'a str {
    if !is_known_tag(&tag.to_lowercase()) {
        return name;
    }
    standard_attribute_name(&name.to_lowercase()).unwrap_or(name)
}
