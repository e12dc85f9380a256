/// Names a label slot in a [`Labels`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
	Undo,
	Redo,
	RemoveStyles,
	FontSize,
	FontFamily,
	TextColor,
	Bold,
	Italic,
	Underline,
	StrikeThrough,
	Superscript,
	Subscript,
	Emoji,
	Headings,
	UnorderedList,
	OrderedList,
	Blockquote,
	Code,
	Link,
	Split,
	TextAlign,
	Media,
	Clear,
}

/// Control titles for one language.
#[derive(Debug)]
pub struct Labels {
	pub undo: &'static str,
	pub redo: &'static str,
	pub remove_styles: &'static str,
	pub font_size: &'static str,
	pub font_family: &'static str,
	pub text_color: &'static str,
	pub bold: &'static str,
	pub italic: &'static str,
	pub underline: &'static str,
	pub strike_through: &'static str,
	pub superscript: &'static str,
	pub subscript: &'static str,
	pub emoji: &'static str,
	pub headings: &'static str,
	pub unordered_list: &'static str,
	pub ordered_list: &'static str,
	pub blockquote: &'static str,
	pub code: &'static str,
	pub link: &'static str,
	pub split: &'static str,
	pub text_align: &'static str,
	pub media: &'static str,
	pub clear: &'static str,
}

impl Labels {
	pub fn get(&self, key: LabelKey) -> &'static str {
		match key {
			LabelKey::Undo => self.undo,
			LabelKey::Redo => self.redo,
			LabelKey::RemoveStyles => self.remove_styles,
			LabelKey::FontSize => self.font_size,
			LabelKey::FontFamily => self.font_family,
			LabelKey::TextColor => self.text_color,
			LabelKey::Bold => self.bold,
			LabelKey::Italic => self.italic,
			LabelKey::Underline => self.underline,
			LabelKey::StrikeThrough => self.strike_through,
			LabelKey::Superscript => self.superscript,
			LabelKey::Subscript => self.subscript,
			LabelKey::Emoji => self.emoji,
			LabelKey::Headings => self.headings,
			LabelKey::UnorderedList => self.unordered_list,
			LabelKey::OrderedList => self.ordered_list,
			LabelKey::Blockquote => self.blockquote,
			LabelKey::Code => self.code,
			LabelKey::Link => self.link,
			LabelKey::Split => self.split,
			LabelKey::TextAlign => self.text_align,
			LabelKey::Media => self.media,
			LabelKey::Clear => self.clear,
		}
	}
}

pub(super) static EN: Labels = Labels {
	undo: "Undo",
	redo: "Redo",
	remove_styles: "Remove Styles",
	font_size: "Font Size",
	font_family: "Font Family",
	text_color: "Color",
	bold: "Bold",
	italic: "Italic",
	underline: "Underline",
	strike_through: "Strike Through",
	superscript: "Superscript",
	subscript: "Subscript",
	emoji: "Emoji",
	headings: "Headings",
	unordered_list: "Unordered List",
	ordered_list: "Ordered List",
	blockquote: "Quote",
	code: "Code",
	link: "Link",
	split: "",
	text_align: "Text Alignment",
	media: "Media",
	clear: "Clear",
};

pub(super) static ZH: Labels = Labels {
	undo: "撤销",
	redo: "重做",
	remove_styles: "清除样式",
	font_size: "字号",
	font_family: "字体",
	text_color: "颜色",
	bold: "加粗",
	italic: "斜体",
	underline: "下划线",
	strike_through: "删除线",
	superscript: "上标",
	subscript: "下标",
	emoji: "表情",
	headings: "标题",
	unordered_list: "无序列表",
	ordered_list: "有序列表",
	blockquote: "引用",
	code: "代码",
	link: "链接",
	split: "",
	text_align: "文本对齐",
	media: "媒体",
	clear: "清除内容",
};

pub(super) static ZH_HANT: Labels = Labels {
	undo: "撤銷",
	redo: "重做",
	remove_styles: "清除樣式",
	font_size: "字號",
	font_family: "字體",
	text_color: "顏色",
	bold: "加粗",
	italic: "斜體",
	underline: "下劃線",
	strike_through: "刪除線",
	superscript: "上標",
	subscript: "下標",
	emoji: "表情",
	headings: "標題",
	unordered_list: "無序列表",
	ordered_list: "有序列表",
	blockquote: "引用",
	code: "代碼",
	link: "鏈接",
	split: "",
	text_align: "文本對齊",
	media: "媒體",
	clear: "清除內容",
};
